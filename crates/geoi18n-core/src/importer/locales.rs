// crates/geoi18n-core/src/importer/locales.rs
use crate::cldr;
use crate::common::{LocaleImport, SkipReason, SkippedFile};
use crate::error::Result;
use crate::model;
use crate::store::{schema, Store};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// **Locale phase:** recreates both name tables and fills them from every
/// qualifying document in `locale_dir`.
///
/// One transaction per document. The first qualifying document of a
/// language wins; documents with fewer than `min_territories` entries are
/// skipped without claiming their language.
pub fn import_locales(
    store: &mut Store,
    locale_dir: &Path,
    min_territories: usize,
) -> Result<LocaleImport> {
    schema::recreate_country_names(store.conn())?;
    schema::recreate_continent_names(store.conn())?;

    let mut report = LocaleImport::default();
    let mut done: HashSet<String> = HashSet::new();

    for path in cldr::locale_files(locale_dir)? {
        let Some(lang) = cldr::language_tag(&path) else {
            skip(&mut report, path, SkipReason::NoLanguageTag);
            continue;
        };
        if done.contains(&lang) {
            skip(&mut report, path, SkipReason::LanguageDone);
            continue;
        }

        let entries = cldr::read_locale_file(&path)?;
        if entries.is_empty() || entries.len() < min_territories {
            skip(&mut report, path, SkipReason::TooFewTerritories(entries.len()));
            continue;
        }
        done.insert(lang.clone());

        let names = model::from_entries(&entries);
        let tx = store.transaction()?;
        let (countries, continents) = schema::insert_locale_names(&tx, &lang, &names)?;
        tx.commit()?;

        info!(%lang, countries, continents, file = %path.display(), "imported locale");
        report.country_rows += countries;
        report.continent_rows += continents;
        report.languages.push(lang);
    }

    Ok(report)
}

fn skip(report: &mut LocaleImport, path: PathBuf, reason: SkipReason) {
    debug!(file = %path.display(), %reason, "skipped locale file");
    report.skipped.push(SkippedFile { path, reason });
}
