// crates/geoi18n-core/src/store/schema.rs

//! Table definitions. Each table has its own named recreate/insert pair so
//! no SQL identifier is ever assembled at runtime.

use crate::error::Result;
use crate::model::LocaleNames;
use rusqlite::{params, Connection, Transaction};

pub const COUNTRY_NAMES: &str = "country_names_i18n";
pub const CONTINENT_NAMES: &str = "continent_names_i18n";
pub const COUNTRY_CONTINENT_MAP: &str = "country_continent_map";

pub fn recreate_country_names(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS country_names_i18n;
         CREATE TABLE country_names_i18n (
             code  TEXT NOT NULL,
             lang  TEXT NOT NULL,
             value TEXT,
             PRIMARY KEY (code, lang)
         );",
    )?;
    Ok(())
}

pub fn recreate_continent_names(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS continent_names_i18n;
         CREATE TABLE continent_names_i18n (
             code  TEXT NOT NULL,
             lang  TEXT NOT NULL,
             value TEXT,
             PRIMARY KEY (code, lang)
         );",
    )?;
    Ok(())
}

pub fn recreate_country_continent_map(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS country_continent_map;
         CREATE TABLE country_continent_map (
             country_code   TEXT NOT NULL,
             continent_code TEXT NOT NULL,
             PRIMARY KEY (country_code, continent_code)
         );",
    )?;
    Ok(())
}

/// Writes one language's names. Returns `(countries, continents)` inserted.
pub fn insert_locale_names(
    tx: &Transaction<'_>,
    lang: &str,
    names: &LocaleNames,
) -> Result<(usize, usize)> {
    let mut countries = 0;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO country_names_i18n (code, lang, value) VALUES (?1, ?2, ?3)",
        )?;
        for (code, value) in &names.countries {
            countries += stmt.execute(params![code, lang, value])?;
        }
    }

    let mut continents = 0;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO continent_names_i18n (code, lang, value) VALUES (?1, ?2, ?3)",
        )?;
        for (code, value) in &names.continents {
            continents += stmt.execute(params![code, lang, value])?;
        }
    }

    Ok((countries, continents))
}

pub fn insert_country_continents<'a, I>(tx: &Transaction<'_>, pairs: I) -> Result<usize>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut stmt = tx.prepare_cached(
        "INSERT INTO country_continent_map (country_code, continent_code) VALUES (?1, ?2)",
    )?;
    let mut inserted = 0;
    for (country, continent) in pairs {
        inserted += stmt.execute(params![country, continent])?;
    }
    Ok(inserted)
}
