//! geoi18n-cli
//! ===========
//!
//! Command-line interface for the `geoi18n-core` importer.
//!
//! This crate primarily provides a binary (`geoi18n`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geoi18n-cli
//! geoi18n import --cldr ~/src/cldr --db data/i18n.sqlite --user <geonames user>
//! geoi18n stats --db data/i18n.sqlite
//! geoi18n country CH --db data/i18n.sqlite --lang it
//! ```
//!
//! For programmatic access use the `geoi18n-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
