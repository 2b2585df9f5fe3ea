// crates/geoi18n-core/src/traits.rs
use crate::error::Result;
use crate::geonames::CountryInfo;

/// What a country-info source handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryInfoFetch {
    Records(Vec<CountryInfo>),
    /// The source could not deliver data this run. The reason is
    /// human-readable (`"HTTP 500 Internal Server Error"`, a geonames status
    /// message, a transport error).
    Unavailable(String),
}

/// Source of country -> continent associations.
///
/// [`crate::geonames::GeonamesClient`] is the production implementation; the
/// importer only sees this trait, so tests and offline runs can plug in a
/// fixed list.
///
/// # Examples
/// ```rust
/// use geoi18n_core::geonames::CountryInfo;
/// use geoi18n_core::traits::{CountryInfoFetch, CountryInfoSource};
///
/// struct Fixed;
/// impl CountryInfoSource for Fixed {
///     fn fetch(&self) -> geoi18n_core::Result<CountryInfoFetch> {
///         Ok(CountryInfoFetch::Records(vec![CountryInfo::new("DE", "EU")]))
///     }
/// }
///
/// assert!(matches!(Fixed.fetch().unwrap(), CountryInfoFetch::Records(r) if r.len() == 1));
/// ```
pub trait CountryInfoSource {
    /// Fetches the records. `Err` aborts the run, `Unavailable` does not.
    fn fetch(&self) -> Result<CountryInfoFetch>;
}
