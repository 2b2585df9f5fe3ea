// crates/geoi18n-core/src/store/backup.rs
use crate::error::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const STAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Where a backup of `db_path` goes: `<dir>/<YYYY-MM-DD-HH-MM-SS>-<basename>`,
/// stamped with the store's last-modified time.
pub fn backup_path(db_path: &Path, modified: DateTime<Local>) -> PathBuf {
    let basename = db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{}-{}", modified.format(STAMP_FORMAT), basename);
    match db_path.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Copies an existing store aside before it is rebuilt.
///
/// Returns `None` when there is nothing at `db_path`. Two runs within the
/// same second write the same backup name; the later copy wins.
pub fn backup_existing(db_path: &Path) -> Result<Option<PathBuf>> {
    if !db_path.is_file() {
        return Ok(None);
    }

    let modified: DateTime<Local> = fs::metadata(db_path)?.modified()?.into();
    let target = backup_path(db_path, modified);
    fs::copy(db_path, &target)?;

    info!(from = %db_path.display(), to = %target.display(), "backed up existing store");
    Ok(Some(target))
}
