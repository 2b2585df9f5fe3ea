// crates/geoi18n-core/src/cldr/parse.rs

//! # Locale Document Parser
//!
//! Streams a CLDR `ldml` document and collects the
//! `localeDisplayNames/territories/territory` nodes into typed
//! [`TerritoryEntry`] values. Nothing else in the document is kept.

use crate::error::{GeoI18nError, Result};
use crate::model::{DraftStatus, TerritoryEntry};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const DISPLAY_NAMES: &[u8] = b"localeDisplayNames";
const TERRITORIES: &[u8] = b"territories";
const TERRITORY: &[u8] = b"territory";

/// Opens and parses one locale document.
pub fn read_locale_file(path: &Path) -> Result<Vec<TerritoryEntry>> {
    let file = File::open(path).map_err(|e| {
        GeoI18nError::NotFound(format!("Locale file not found at {}: {}", path.display(), e))
    })?;

    parse_territories(BufReader::new(file)).map_err(|source| GeoI18nError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// Collects every territory entry of the document read from `input`.
///
/// A document without a territories section yields an empty list. A missing
/// or unreadable `type`/`draft` attribute is read as an empty string.
pub fn parse_territories<R: BufRead>(
    input: R,
) -> std::result::Result<Vec<TerritoryEntry>, quick_xml::Error> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<TerritoryEntry> = None;
    let mut entries = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == TERRITORY && in_territories(&stack) {
                    current = Some(start_entry(e));
                }
                stack.push(name);
            }
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == TERRITORY && in_territories(&stack) {
                    entries.push(start_entry(e));
                }
            }
            Event::End(_) => {
                stack.pop();
                if in_territories(&stack) {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                }
            }
            Event::Text(ref e) => {
                if let Some(entry) = current.as_mut() {
                    entry.value.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(entry) = current.as_mut() {
                    entry.value.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

/// `ldml/localeDisplayNames/territories`, whatever the root element is called.
fn in_territories(stack: &[Vec<u8>]) -> bool {
    stack.len() == 3 && stack[1] == DISPLAY_NAMES && stack[2] == TERRITORIES
}

fn start_entry(e: &BytesStart<'_>) -> TerritoryEntry {
    TerritoryEntry {
        code: attr_or_empty(e, "type"),
        value: String::new(),
        draft: DraftStatus::from_attr(&attr_or_empty(e, "draft")),
    }
}

fn attr_or_empty(e: &BytesStart<'_>, name: &str) -> String {
    e.try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Vec<TerritoryEntry> {
        parse_territories(xml.as_bytes()).expect("parse")
    }

    #[test]
    fn reads_territories_with_draft() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
    <identity><language type="de"/></identity>
    <localeDisplayNames>
        <territories>
            <territory type="150">Europa</territory>
            <territory type="BA">Bosnien und Herzegowina</territory>
            <territory type="BA" draft="short">Bosnien</territory>
            <territory type="TL" draft="unconfirmed">Timor-Leste</territory>
        </territories>
    </localeDisplayNames>
</ldml>"#;
        let entries = parse(xml);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], TerritoryEntry::new("150", "Europa", DraftStatus::Approved));
        assert_eq!(entries[2].draft, DraftStatus::Short);
        assert_eq!(entries[3].draft, DraftStatus::Unconfirmed);
    }

    #[test]
    fn unescapes_entities() {
        let xml = r#"<ldml><localeDisplayNames><territories>
            <territory type="TT">Trinidad &amp; Tobago</territory>
        </territories></localeDisplayNames></ldml>"#;
        assert_eq!(parse(xml)[0].value, "Trinidad & Tobago");
    }

    #[test]
    fn ignores_territories_outside_display_names() {
        let xml = r#"<ldml>
            <territories><territory type="DE">Wrong</territory></territories>
            <localeDisplayNames>
                <languages><territory type="FR">Also wrong</territory></languages>
            </localeDisplayNames>
        </ldml>"#;
        assert!(parse(xml).is_empty());
    }

    #[test]
    fn missing_section_yields_nothing() {
        assert!(parse("<ldml><identity/></ldml>").is_empty());
    }

    #[test]
    fn missing_attributes_are_empty() {
        let xml = r#"<ldml><localeDisplayNames><territories>
            <territory>Nameless</territory>
            <territory type="AQ"/>
        </territories></localeDisplayNames></ldml>"#;
        let entries = parse(xml);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code, "");
        assert_eq!(entries[0].value, "Nameless");
        assert_eq!(entries[1], TerritoryEntry::new("AQ", "", DraftStatus::Approved));
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        let xml = "<ldml><localeDisplayNames><territories></localeDisplayNames></ldml>";
        assert!(parse_territories(xml.as_bytes()).is_err());
    }
}
