// crates/geoi18n-core/src/model/convert.rs
use super::territory::{DraftStatus, TerritoryEntry};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

/// `ZZ` is "Unknown Region", `FX` the retired "Metropolitan France" alias.
pub const EXCLUDED_CODES: [&str; 2] = ["ZZ", "FX"];

/// UN M.49 area codes of the continents, mapped to their ISO-style two letter codes.
static M49_CONTINENTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("002", "AF"),
        ("003", "NA"),
        ("005", "SA"),
        ("009", "OC"),
        ("142", "AS"),
        ("150", "EU"),
    ])
});

/// Looks up the continent code for an M.49 area code (`"150"` -> `"EU"`).
pub fn continent_for_m49(code: &str) -> Option<&'static str> {
    M49_CONTINENTS.get(code).copied()
}

/// The names one locale document contributes, keyed by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleNames {
    pub countries: BTreeMap<String, String>,
    pub continents: BTreeMap<String, String>,
}

impl LocaleNames {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.continents.is_empty()
    }
}

/// **Selection:** TerritoryEntry list -> best name per code.
///
/// - `ZZ`/`FX` are dropped.
/// - Numeric codes only count when they name a continent; the last one wins.
/// - Unconfirmed country names are dropped.
/// - For a country the first non-empty name wins, unless a later one is
///   marked `draft="short"`, which always replaces it. A country that only
///   ever has an empty name is kept with that empty name.
pub fn from_entries<'a, I>(entries: I) -> LocaleNames
where
    I: IntoIterator<Item = &'a TerritoryEntry>,
{
    let mut names = LocaleNames::default();

    for entry in entries {
        if EXCLUDED_CODES.contains(&entry.code.as_str()) {
            continue;
        }

        if entry.is_area_code() {
            if let Some(continent) = continent_for_m49(&entry.code) {
                names
                    .continents
                    .insert(continent.to_string(), entry.value.clone());
            }
            continue;
        }

        match entry.draft {
            DraftStatus::Unconfirmed => {}
            DraftStatus::Short => {
                names
                    .countries
                    .insert(entry.code.clone(), entry.value.clone());
            }
            _ => {
                let slot = names.countries.entry(entry.code.clone()).or_default();
                if slot.is_empty() {
                    *slot = entry.value.clone();
                }
            }
        }
    }

    names
}
