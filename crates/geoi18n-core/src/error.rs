// crates/geoi18n-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an import run.
///
/// Everything that is *not* listed here (a geonames outage, a locale file
/// without enough territories, an unconfirmed entry) is reported through
/// [`crate::ImportReport`] instead of failing the run.
#[derive(Debug, Error)]
pub enum GeoI18nError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed XML in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoI18nError>;
