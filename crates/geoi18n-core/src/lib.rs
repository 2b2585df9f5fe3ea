// crates/geoi18n-core/src/lib.rs

//! # geoi18n-core
//!
//! Builds a small SQLite cross-reference of localized territory names:
//!
//! - `country_names_i18n` / `continent_names_i18n` from the Unicode CLDR
//!   locale documents (`common/main/*.xml`),
//! - `country_continent_map` from the geonames.org `countryInfoJSON` service.
//!
//! ```no_run
//! use geoi18n_core::{Importer, ImporterConfig};
//!
//! let config = ImporterConfig::new("/src/cldr", "/var/lib/geo/i18n.sqlite", "demo");
//! let report = Importer::new(config).run()?;
//! println!("{} languages imported", report.locales.languages.len());
//! # Ok::<(), geoi18n_core::GeoI18nError>(())
//! ```

pub mod cldr;
pub mod common;
pub mod config;
pub mod error;
pub mod geonames;
pub mod importer;
pub mod model;
pub mod store;
pub mod traits;

// Re-exports
pub use crate::common::{
    ContinentMapOutcome, ImportReport, LocaleImport, SkipReason, SkippedFile, TableStats,
};
pub use crate::config::{ImporterConfig, GEONAMES_ENDPOINT};
pub use crate::error::{GeoI18nError, Result};
pub use crate::geonames::{CountryInfo, GeonamesClient};
pub use crate::importer::Importer;
pub use crate::model::{DraftStatus, LocaleNames, TerritoryEntry, MIN_TERRITORIES};
pub use crate::store::{NameRow, Store};
pub use crate::traits::{CountryInfoFetch, CountryInfoSource};
