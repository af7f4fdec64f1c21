// src/scrape/mod.rs
mod bundles;

pub use bundles::parse_catalog;

use crate::catalog::Catalog;
use crate::core::net;
use crate::error::ScrapeError;
use crate::params::PAGE_PATH;

/// Fetch the live page and parse it. Any failure here is fatal to startup;
/// navigation never sees a partial catalog.
pub fn fetch_catalog() -> Result<Catalog, ScrapeError> {
    let doc = net::http_get(PAGE_PATH)?;
    let catalog = parse_catalog(&doc)?;
    logf!(
        "catalog ready: {} rooms, {} bundles",
        catalog.rooms.len(),
        catalog.rooms.iter().map(|r| r.bundles.len()).sum::<usize>()
    );
    Ok(catalog)
}
