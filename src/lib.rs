//! geoi18n-rs
//!
//! Umbrella crate over `geoi18n-core`. Demos import everything they need
//! through [`prelude`].

pub use geoi18n_core;

pub mod prelude {
    pub use geoi18n_core::{
        ContinentMapOutcome, CountryInfo, CountryInfoFetch, CountryInfoSource, GeoI18nError,
        GeonamesClient, ImportReport, Importer, ImporterConfig, Result, SkipReason, Store,
        TableStats,
    };
}
