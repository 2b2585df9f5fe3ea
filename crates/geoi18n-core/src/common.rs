// crates/geoi18n-core/src/common.rs

//! Shared result types returned by the importer and the read-back helpers.

use std::fmt;
use std::path::PathBuf;

/// Row counts of the three output tables.
///
/// Returned by [`crate::Store::stats`]; a missing table counts as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub country_names: usize,
    pub continent_names: usize,
    pub country_continents: usize,
    pub languages: usize,
}

/// Why a locale document contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Another document already supplied this language.
    LanguageDone,
    /// No territories section, or fewer entries than the threshold.
    TooFewTerritories(usize),
    /// The file name does not yield a language tag.
    NoLanguageTag,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LanguageDone => f.write_str("language already imported"),
            Self::TooFewTerritories(n) => write!(f, "only {n} territories"),
            Self::NoLanguageTag => f.write_str("no language tag in file name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of the locale phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleImport {
    /// Imported language tags, in import order.
    pub languages: Vec<String>,
    pub skipped: Vec<SkippedFile>,
    pub country_rows: usize,
    pub continent_rows: usize,
}

/// Outcome of the continent-mapping phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContinentMapOutcome {
    Imported(usize),
    /// The table was recreated but left empty.
    Skipped(String),
}

impl ContinentMapOutcome {
    pub fn rows(&self) -> usize {
        match self {
            Self::Imported(n) => *n,
            Self::Skipped(_) => 0,
        }
    }
}

/// Summary of one importer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub backup: Option<PathBuf>,
    pub locales: LocaleImport,
    pub continent_map: ContinentMapOutcome,
}
