// 🌐 Catalog Client - one blocking GET per lookup against the remote catalog
//
// Status 200 is parsed into a Creature; every other status means "not found".
// Transport failures and malformed bodies are surfaced as CatalogError so the
// caller decides whether to stop the run.

use crate::creature::Creature;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co";

/// Errors from catalog lookups. "Not found" is not an error, it is `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Anything that can resolve a creature name to a record.
pub trait CreatureSource {
    fn fetch(&self, name: &str) -> Result<Option<Creature>, CatalogError>;
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: i64,
    name: String,
    stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    stat: NamedRef,
    base_stat: i64,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

/// Parse a success body into a Creature.
///
/// Every field is required; a payload missing `id`, `name`, `stats` or any
/// `stat.name` / `base_stat` is rejected instead of half-populated.
pub fn parse_creature(body: &str) -> Result<Creature, CatalogError> {
    let entry: CatalogEntry =
        serde_json::from_str(body).map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

    let stats = entry
        .stats
        .into_iter()
        .map(|slot| (slot.stat.name, slot.base_stat))
        .collect();

    Ok(Creature::new(entry.name, entry.id, stats))
}

// ============================================================================
// HTTP CLIENT
// ============================================================================

#[derive(Debug)]
pub struct HttpCatalog {
    http: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Client against `base_url` (`DEFAULT_BASE_URL` for the public catalog).
    ///
    /// `timeout = None` disables reqwest's built-in 30s default, so a slow
    /// server blocks the lookup until it answers or the transport fails.
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(HttpCatalog {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn lookup_url(&self, name: &str) -> String {
        format!("{}/api/v2/pokemon/{}", self.base_url, name.to_lowercase())
    }
}

impl CreatureSource for HttpCatalog {
    fn fetch(&self, name: &str) -> Result<Option<Creature>, CatalogError> {
        let url = self.lookup_url(name);
        debug!(%url, "catalog lookup");

        let response = self.http.get(&url).send()?;
        let status = response.status();

        if status != StatusCode::OK {
            info!(%url, status = status.as_u16(), "catalog entry not found");
            return Ok(None);
        }

        let body = response.text()?;
        let creature = parse_creature(&body)?;
        debug!(name = %creature.name, id = creature.id, "catalog entry parsed");

        Ok(Some(creature))
    }
}
