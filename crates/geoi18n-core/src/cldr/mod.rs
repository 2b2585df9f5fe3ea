// crates/geoi18n-core/src/cldr/mod.rs

//! # CLDR Source Tree
//!
//! Locates the per-language documents of a CLDR checkout
//! (`<root>/common/main/*.xml`) and derives their language tags.

use crate::error::{GeoI18nError, Result};
use std::fs;
use std::path::{Path, PathBuf};

mod parse;

pub use parse::{parse_territories, read_locale_file};

/// `<cldr root>/common/main`.
pub fn locale_dir(cldr_root: &Path) -> PathBuf {
    cldr_root.join("common").join("main")
}

/// Language tag of a locale document: the first run of the file name that
/// contains neither `_` nor `.`. Leading separators are skipped.
///
/// `de_CH.xml` -> `de`, `root.xml` -> `root`, `_odd.xml` -> `odd`.
pub fn language_tag(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    name.split(['_', '.'])
        .find(|part| !part.is_empty())
        .map(str::to_string)
}

/// Fails with [`GeoI18nError::NotFound`] unless `dir` is a directory.
pub fn ensure_locale_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    Err(GeoI18nError::NotFound(format!(
        "{} does not exist. Get the latest CLDR release from https://cldr.unicode.org",
        dir.display()
    )))
}

/// Lists the `*.xml` files directly inside `dir`, sorted by path.
///
/// Sorting gives the base document (`de.xml`) precedence over its regional
/// variants (`de_AT.xml`, `de_CH.xml`).
pub fn locale_files(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_locale_dir(dir)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "xml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
