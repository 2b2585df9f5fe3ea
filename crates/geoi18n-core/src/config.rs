// crates/geoi18n-core/src/config.rs
use crate::model::MIN_TERRITORIES;
use std::path::PathBuf;

pub const GEONAMES_ENDPOINT: &str = "http://api.geonames.org/countryInfoJSON";

/// Inputs of one importer run.
///
/// The three paths/credentials have no defaults. `geonames_endpoint` and
/// `min_territories` start at [`GEONAMES_ENDPOINT`] and [`MIN_TERRITORIES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterConfig {
    /// Root of a CLDR checkout (the directory containing `common/`).
    pub cldr_path: PathBuf,
    /// SQLite file to (re)build.
    pub db_path: PathBuf,
    /// geonames.org account name.
    pub geonames_user: String,
    pub geonames_endpoint: String,
    pub min_territories: usize,
}

impl ImporterConfig {
    pub fn new(
        cldr_path: impl Into<PathBuf>,
        db_path: impl Into<PathBuf>,
        geonames_user: impl Into<String>,
    ) -> Self {
        Self {
            cldr_path: cldr_path.into(),
            db_path: db_path.into(),
            geonames_user: geonames_user.into(),
            geonames_endpoint: GEONAMES_ENDPOINT.to_string(),
            min_territories: MIN_TERRITORIES,
        }
    }

    pub fn with_geonames_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.geonames_endpoint = endpoint.into();
        self
    }

    pub fn with_min_territories(mut self, min: usize) -> Self {
        self.min_territories = min;
        self
    }
}
