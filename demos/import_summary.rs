//! Import summary demo for geoi18n-rs
//!
//! Runs a full import and prints what ended up in the store.
//!
//! ```text
//! cargo run --example import_summary -- <cldr root> <db file> <geonames user>
//! ```

use geoi18n_rs::prelude::*;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(cldr), Some(db), Some(user)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: import_summary <cldr root> <db file> <geonames user>");
        std::process::exit(2);
    };

    println!("=== geoi18n import ===\n");
    let report = Importer::new(ImporterConfig::new(&cldr, &db, user)).run()?;

    if let Some(backup) = &report.backup {
        println!("Previous store saved as {}", backup.display());
    }
    println!("Imported languages: {}", report.locales.languages.join(", "));
    for skipped in report.locales.skipped.iter().take(10) {
        println!("  skipped {} ({})", skipped.path.display(), skipped.reason);
    }
    if report.locales.skipped.len() > 10 {
        println!("  ... and {} more", report.locales.skipped.len() - 10);
    }

    match &report.continent_map {
        ContinentMapOutcome::Imported(n) => println!("Continent map: {n} countries"),
        ContinentMapOutcome::Skipped(reason) => println!("Continent map skipped: {reason}"),
    }

    let store = Store::open(std::path::Path::new(&db))?;
    let stats = store.stats()?;
    println!("\n--- Store ---");
    println!("Country names:   {}", stats.country_names);
    println!("Continent names: {}", stats.continent_names);
    for row in store.country_names("CH", None)?.iter().take(5) {
        println!("  CH [{}] {}", row.lang, row.value);
    }

    Ok(())
}
