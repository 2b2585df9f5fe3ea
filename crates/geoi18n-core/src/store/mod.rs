// crates/geoi18n-core/src/store/mod.rs

//! # SQLite Store
//!
//! Owns the connection to the destination database. [`Store::bootstrap`]
//! prepares a store for a fresh import (directory, backup, file), while
//! [`Store::open`] attaches to an existing one for read-back.

use crate::common::TableStats;
use crate::error::{GeoI18nError, Result};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

mod backup;
pub mod schema;

pub use backup::{backup_existing, backup_path};

/// A localized name row as stored in `country_names_i18n`/`continent_names_i18n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRow {
    pub code: String,
    pub lang: String,
    pub value: String,
}

#[derive(Debug)]
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Prepares `db_path` for a fresh import.
    ///
    /// 1. Creates the parent directory.
    /// 2. Copies an existing store to a timestamped backup.
    /// 3. Creates the file if needed and opens it.
    ///
    /// Returns the open store and the backup path, if one was written.
    pub fn bootstrap(db_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(dir) = db_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let backup = backup_existing(db_path)?;

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(db_path)?;

        let store = Self {
            conn: Connection::open(db_path)?,
            path: db_path.to_path_buf(),
        };
        Ok((store, backup))
    }

    /// Opens an existing store for reading.
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.is_file() {
            return Err(GeoI18nError::NotFound(format!(
                "No store at {}; run an import first",
                db_path.display()
            )));
        }
        Ok(Self {
            conn: Connection::open(db_path)?,
            path: db_path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    // -----------------------------------------------------------------------
    // READ-BACK
    // -----------------------------------------------------------------------

    /// Row counts of the three tables. A table that does not exist counts as 0.
    pub fn stats(&self) -> Result<TableStats> {
        Ok(TableStats {
            country_names: self.count_rows(schema::COUNTRY_NAMES)?,
            continent_names: self.count_rows(schema::CONTINENT_NAMES)?,
            country_continents: self.count_rows(schema::COUNTRY_CONTINENT_MAP)?,
            languages: self.count_languages()?,
        })
    }

    /// Localized names of a country, optionally restricted to one language.
    pub fn country_names(&self, code: &str, lang: Option<&str>) -> Result<Vec<NameRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT code, lang, value FROM country_names_i18n
             WHERE code = ?1 AND (?2 IS NULL OR lang = ?2)
             ORDER BY lang",
        )?;
        let rows = stmt
            .query_map(params![code, lang], |row| {
                Ok(NameRow {
                    code: row.get(0)?,
                    lang: row.get(1)?,
                    value: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Continent code(s) a country is mapped to.
    pub fn continents_of(&self, country: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT continent_code FROM country_continent_map
             WHERE country_code = ?1 ORDER BY continent_code",
        )?;
        let rows = stmt
            .query_map(params![country], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
    }

    /// Name of a continent in one language.
    pub fn continent_name(&self, code: &str, lang: &str) -> Result<Option<String>> {
        let name = self
            .conn
            .query_row(
                "SELECT value FROM continent_names_i18n WHERE code = ?1 AND lang = ?2",
                params![code, lang],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?
            .flatten();
        Ok(name)
    }

    fn table_exists(&self, table: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn count_rows(&self, table: &str) -> Result<usize> {
        if !self.table_exists(table)? {
            return Ok(0);
        }
        let sql = match table {
            schema::COUNTRY_NAMES => "SELECT COUNT(*) FROM country_names_i18n",
            schema::CONTINENT_NAMES => "SELECT COUNT(*) FROM continent_names_i18n",
            schema::COUNTRY_CONTINENT_MAP => "SELECT COUNT(*) FROM country_continent_map",
            other => {
                return Err(GeoI18nError::InvalidData(format!("unknown table {other}")));
            }
        };
        let count: i64 = self.conn.query_row(sql, [], |r| r.get(0))?;
        Ok(count as usize)
    }

    fn count_languages(&self) -> Result<usize> {
        if !self.table_exists(schema::COUNTRY_NAMES)? {
            return Ok(0);
        }
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT lang) FROM country_names_i18n",
            [],
            |r| r.get(0),
        )?;
        Ok(count as usize)
    }
}
