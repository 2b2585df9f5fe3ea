// crates/geoi18n-core/src/model/territory.rs
/// CLDR quality marker carried by the `draft` attribute of a translated entry.
///
/// An absent, empty or unrecognised attribute is treated as [`DraftStatus::Approved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftStatus {
    Unconfirmed,
    Short,
    Provisional,
    Contributed,
    #[default]
    Approved,
}

impl DraftStatus {
    pub fn from_attr(value: &str) -> Self {
        match value {
            "unconfirmed" => Self::Unconfirmed,
            "short" => Self::Short,
            "provisional" => Self::Provisional,
            "contributed" => Self::Contributed,
            _ => Self::Approved,
        }
    }
}

/// One `<territory type=".." draft="..">Name</territory>` node of a locale document.
///
/// `code` is either an ISO 3166-1 alpha-2 code (`DE`) or a numeric
/// UN M.49 area code (`150`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryEntry {
    pub code: String,
    pub value: String,
    pub draft: DraftStatus,
}

impl TerritoryEntry {
    pub fn new(code: impl Into<String>, value: impl Into<String>, draft: DraftStatus) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
            draft,
        }
    }

    /// `true` for M.49 area codes. These never name a country.
    #[inline]
    pub fn is_area_code(&self) -> bool {
        !self.code.is_empty() && self.code.bytes().all(|b| b.is_ascii_digit())
    }
}
