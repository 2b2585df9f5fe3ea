// crates/geoi18n-core/src/importer/continents.rs
use crate::common::ContinentMapOutcome;
use crate::error::Result;
use crate::store::{schema, Store};
use crate::traits::{CountryInfoFetch, CountryInfoSource};
use tracing::{info, warn};

/// **Continent phase:** recreates `country_continent_map` and fills it from
/// `source` in a single transaction.
///
/// An unavailable source leaves the table empty and is reported as
/// [`ContinentMapOutcome::Skipped`].
pub fn import_continent_map<S: CountryInfoSource>(
    store: &mut Store,
    source: &S,
) -> Result<ContinentMapOutcome> {
    schema::recreate_country_continent_map(store.conn())?;

    let records = match source.fetch()? {
        CountryInfoFetch::Records(records) => records,
        CountryInfoFetch::Unavailable(reason) => {
            warn!(%reason, "country info unavailable, continent map left empty");
            return Ok(ContinentMapOutcome::Skipped(reason));
        }
    };

    let tx = store.transaction()?;
    let inserted = schema::insert_country_continents(
        &tx,
        records
            .iter()
            .map(|r| (r.country_code.as_str(), r.continent.as_str())),
    )?;
    tx.commit()?;

    info!(rows = inserted, "imported continent map");
    Ok(ContinentMapOutcome::Imported(inserted))
}
