use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoi18n
#[derive(Debug, Parser)]
#[command(
    name = "geoi18n",
    version,
    about = "Import CLDR territory names and geonames continent data into SQLite"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rebuild the store from a CLDR checkout and geonames.org
    Import {
        /// Root of the CLDR checkout (the directory containing common/main)
        #[arg(long = "cldr")]
        cldr: PathBuf,

        /// SQLite file to create or rebuild (an existing file is backed up first)
        #[arg(long = "db")]
        db: PathBuf,

        /// geonames.org user name
        #[arg(short = 'u', long = "user")]
        user: String,

        /// Override the geonames countryInfoJSON endpoint
        #[arg(long = "endpoint")]
        endpoint: Option<String>,
    },

    /// Show row counts of an imported store
    Stats {
        /// SQLite file produced by `import`
        #[arg(long = "db")]
        db: PathBuf,
    },

    /// Show the localized names and continent of a country
    Country {
        /// ISO2 code (e.g. DE)
        code: String,

        /// SQLite file produced by `import`
        #[arg(long = "db")]
        db: PathBuf,

        /// Restrict to one language tag (e.g. fr)
        #[arg(short = 'l', long = "lang")]
        lang: Option<String>,
    },
}
