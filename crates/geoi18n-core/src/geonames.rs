// crates/geoi18n-core/src/geonames.rs

//! # geonames.org Country Info
//!
//! Blocking client for `countryInfoJSON`. Only the two fields the importer
//! needs are deserialized; everything else in the payload is ignored.

use crate::error::Result;
use crate::traits::{CountryInfoFetch, CountryInfoSource};
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Raw country record as it comes from geonames:
/// ```json
/// { "countryCode": "DE", "continent": "EU", "countryName": "Germany", ... }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryInfo {
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub continent: String,
}

impl CountryInfo {
    pub fn new(country_code: impl Into<String>, continent: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            continent: continent.into(),
        }
    }
}

/// Error envelope geonames answers with (still HTTP 200) for unknown users,
/// disabled web services or exhausted credits.
#[derive(Debug, Deserialize)]
struct ServiceStatus {
    #[serde(default)]
    message: String,
    #[serde(default)]
    value: Option<i64>,
}

type Grouping = BTreeMap<String, Vec<CountryInfo>>;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Status { status: ServiceStatus },
    Grouped(Grouping),
    Sequence(Vec<Grouping>),
}

/// Parses a `countryInfoJSON` body.
///
/// Accepts the `{"geonames": [...]}` object as well as a list of such
/// groupings. A status envelope becomes [`CountryInfoFetch::Unavailable`];
/// anything else that does not match is a JSON error.
pub fn parse_country_info(body: &str) -> Result<CountryInfoFetch> {
    let payload: Payload = serde_json::from_str(body)?;
    let records = match payload {
        Payload::Status { status } => {
            let reason = match status.value {
                Some(code) => format!("geonames status {code}: {}", status.message),
                None => format!("geonames status: {}", status.message),
            };
            return Ok(CountryInfoFetch::Unavailable(reason));
        }
        Payload::Grouped(group) => group.into_values().flatten().collect(),
        Payload::Sequence(groups) => groups
            .into_iter()
            .flat_map(|g| g.into_values().flatten())
            .collect(),
    };
    Ok(CountryInfoFetch::Records(records))
}

/// Fetches country info from geonames with the blocking reqwest client.
#[derive(Debug, Clone)]
pub struct GeonamesClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    username: String,
}

impl GeonamesClient {
    pub fn new(endpoint: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            username: username.into(),
        }
    }
}

impl CountryInfoSource for GeonamesClient {
    /// Anything short of a readable HTTP 200 is `Unavailable`; only a body
    /// that is not valid JSON fails.
    fn fetch(&self) -> Result<CountryInfoFetch> {
        debug!(endpoint = %self.endpoint, "requesting country info");

        let response = match self
            .http
            .get(&self.endpoint)
            .query(&[("username", self.username.as_str())])
            .send()
        {
            Ok(r) => r,
            Err(e) => return Ok(CountryInfoFetch::Unavailable(format!("request failed: {e}"))),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(CountryInfoFetch::Unavailable(format!("HTTP {status}")));
        }

        let body = match response.text() {
            Ok(b) => b,
            Err(e) => {
                return Ok(CountryInfoFetch::Unavailable(format!(
                    "reading body failed: {e}"
                )))
            }
        };

        parse_country_info(&body)
    }
}
