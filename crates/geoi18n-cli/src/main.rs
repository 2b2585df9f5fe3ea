//! geoi18n — Command-line front-end for geoi18n-core
//!
//! Usage examples
//! --------------
//!
//! - Build (or rebuild) the store
//!   $ geoi18n import --cldr ~/src/cldr --db data/i18n.sqlite --user demo
//!
//! - Show row counts
//!   $ geoi18n stats --db data/i18n.sqlite
//!
//! - Names of a country in every imported language, or just one
//!   $ geoi18n country DE --db data/i18n.sqlite
//!   $ geoi18n country de --db data/i18n.sqlite --lang fr
//!
//! Logging goes to stderr; tune it with `RUST_LOG`
//! (default `geoi18n=info,geoi18n_core=info`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geoi18n_core::{ContinentMapOutcome, Importer, ImporterConfig, Store};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "geoi18n=info,geoi18n_core=info";

/// `RUST_LOG` as given, or the default when it is unset or unparsable.
fn log_filter(spec: Option<&str>) -> EnvFilter {
    spec.and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Import {
            cldr,
            db,
            user,
            endpoint,
        } => {
            let mut config = ImporterConfig::new(cldr, db, user);
            if let Some(endpoint) = endpoint {
                config = config.with_geonames_endpoint(endpoint);
            }

            let report = Importer::new(config).run().context("import failed")?;

            println!("Import finished:");
            if let Some(backup) = &report.backup {
                println!("  Backup: {}", backup.display());
            }
            println!("  Languages: {}", report.locales.languages.len());
            println!("  Country names: {}", report.locales.country_rows);
            println!("  Continent names: {}", report.locales.continent_rows);
            println!("  Skipped files: {}", report.locales.skipped.len());
            match &report.continent_map {
                ContinentMapOutcome::Imported(n) => println!("  Country/continent pairs: {n}"),
                ContinentMapOutcome::Skipped(reason) => {
                    println!("  Country/continent pairs: 0");
                    eprintln!("warning: continent map not imported ({reason})");
                }
            }
        }

        Commands::Stats { db } => {
            let store = Store::open(&db)?;
            let stats = store.stats()?;
            println!("Store statistics ({}):", db.display());
            println!("  Languages: {}", stats.languages);
            println!("  Country names: {}", stats.country_names);
            println!("  Continent names: {}", stats.continent_names);
            println!("  Country/continent pairs: {}", stats.country_continents);
        }

        Commands::Country { code, db, lang } => {
            let store = Store::open(&db)?;
            let code = code.to_uppercase();
            let names = store.country_names(&code, lang.as_deref())?;
            if names.is_empty() {
                eprintln!("No names found for: {code}");
                return Ok(());
            }

            let continents = store.continents_of(&code)?;
            println!("Country: {code}");
            if continents.is_empty() {
                println!("Continent: unknown");
            } else {
                println!("Continent: {}", continents.join(", "));
            }
            for row in names {
                let continent_name = match continents.first() {
                    Some(c) => store.continent_name(c, &row.lang)?,
                    None => None,
                };
                match continent_name {
                    Some(cn) => println!("  {:<12} {} ({cn})", row.lang, row.value),
                    None => println!("  {:<12} {}", row.lang, row.value),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_directives_are_kept() {
        let filter = log_filter(Some("geoi18n_core=debug")).to_string();
        assert!(filter.contains("geoi18n_core=debug"), "{filter}");
        assert!(!filter.contains("geoi18n_core=info"), "{filter}");
    }

    #[test]
    fn falls_back_to_default() {
        let filter = log_filter(None).to_string();
        assert!(filter.contains("geoi18n=info"), "{filter}");
        assert!(filter.contains("geoi18n_core=info"), "{filter}");
    }
}
