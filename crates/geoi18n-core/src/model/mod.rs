// crates/geoi18n-core/src/model/mod.rs
pub mod convert;
pub mod territory;

pub use convert::{continent_for_m49, from_entries, LocaleNames, EXCLUDED_CODES};
pub use territory::{DraftStatus, TerritoryEntry};

/// Minimum number of `<territory>` entries a locale document must declare
/// before it is imported. Smaller documents are regional fragments
/// (`de_AT.xml`, `en_GB.xml`, ...) that only override a handful of names.
pub const MIN_TERRITORIES: usize = 200;
