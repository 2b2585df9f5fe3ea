// crates/geoi18n-core/src/importer/mod.rs

//! # Importer
//!
//! Runs the three phases in order against one store:
//!
//! 1. **Bootstrap** — check the CLDR tree, back up and open the store.
//! 2. **Locales** — `country_names_i18n` and `continent_names_i18n`.
//! 3. **Continents** — `country_continent_map` from geonames.
//!
//! Every phase recreates its tables, so a rerun fully replaces the previous
//! data. Each table is filled inside its own transaction; there is no
//! atomicity across tables.

use crate::cldr;
use crate::common::ImportReport;
use crate::config::ImporterConfig;
use crate::error::Result;
use crate::geonames::GeonamesClient;
use crate::store::Store;
use crate::traits::CountryInfoSource;
use tracing::info;

mod continents;
mod locales;

pub use continents::import_continent_map;
pub use locales::import_locales;

#[derive(Debug, Clone)]
pub struct Importer {
    config: ImporterConfig,
}

impl Importer {
    pub fn new(config: ImporterConfig) -> Self {
        Self { config }
    }

    /// Runs the import against the geonames web service.
    pub fn run(&self) -> Result<ImportReport> {
        let client = GeonamesClient::new(
            self.config.geonames_endpoint.as_str(),
            self.config.geonames_user.as_str(),
        );
        self.run_with(&client)
    }

    /// Runs the import with continent data taken from `source`.
    pub fn run_with<S: CountryInfoSource>(&self, source: &S) -> Result<ImportReport> {
        let locale_dir = cldr::locale_dir(&self.config.cldr_path);
        cldr::ensure_locale_dir(&locale_dir)?;

        let (mut store, backup) = Store::bootstrap(&self.config.db_path)?;
        info!(store = %store.path().display(), "store ready");

        let locales = import_locales(&mut store, &locale_dir, self.config.min_territories)?;
        info!(
            languages = locales.languages.len(),
            skipped = locales.skipped.len(),
            "locale phase done"
        );

        let continent_map = import_continent_map(&mut store, source)?;
        info!(rows = continent_map.rows(), "continent phase done");

        Ok(ImportReport {
            backup,
            locales,
            continent_map,
        })
    }
}
