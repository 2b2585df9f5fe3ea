//! Shared fixtures: a scratch CLDR tree and an in-memory country-info source.

#![allow(dead_code)]

use geoi18n_core::{CountryInfo, CountryInfoFetch, CountryInfoSource};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway CLDR checkout plus a store path next to it.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("cldr/common/main")).expect("create main dir");
        Self { dir }
    }

    pub fn cldr_root(&self) -> PathBuf {
        self.dir.path().join("cldr")
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("out/geo.sqlite")
    }

    pub fn write_locale(&self, file_name: &str, xml: &str) {
        fs::write(self.cldr_root().join("common/main").join(file_name), xml)
            .expect("write locale");
    }

    pub fn store_dir(&self) -> PathBuf {
        self.db_path().parent().unwrap().to_path_buf()
    }
}

/// Builds an `ldml` document holding `entries` followed by `filler` generated
/// country entries (`X000`, `X001`, ...).
pub fn locale_xml(entries: &[(&str, Option<&str>, &str)], filler: usize) -> String {
    let mut body = String::new();
    for (code, draft, value) in entries {
        match draft {
            Some(d) => body.push_str(&format!(
                "            <territory type=\"{code}\" draft=\"{d}\">{value}</territory>\n"
            )),
            None => body.push_str(&format!(
                "            <territory type=\"{code}\">{value}</territory>\n"
            )),
        }
    }
    for i in 0..filler {
        body.push_str(&format!(
            "            <territory type=\"X{i:03}\">Filler {i}</territory>\n"
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
    <identity>
        <version number="$Revision$"/>
    </identity>
    <localeDisplayNames>
        <territories>
{body}        </territories>
    </localeDisplayNames>
</ldml>
"#
    )
}

pub fn count_files_ending(dir: &Path, suffix: &str) -> usize {
    fs::read_dir(dir)
        .expect("read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(suffix))
        .count()
}

/// Country-info source with a fixed answer.
pub struct FixedSource(pub CountryInfoFetch);

impl FixedSource {
    pub fn records(pairs: &[(&str, &str)]) -> Self {
        Self(CountryInfoFetch::Records(
            pairs
                .iter()
                .map(|(country, continent)| CountryInfo::new(*country, *continent))
                .collect(),
        ))
    }

    pub fn unavailable(reason: &str) -> Self {
        Self(CountryInfoFetch::Unavailable(reason.to_string()))
    }
}

impl CountryInfoSource for FixedSource {
    fn fetch(&self) -> geoi18n_core::Result<CountryInfoFetch> {
        Ok(self.0.clone())
    }
}
