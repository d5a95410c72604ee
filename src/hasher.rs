// 🔑 Identity Hasher - stable cache keys for creature names

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How a raw creature name is turned into a cache key.
///
/// The catalog lookup always lowercases the name, so `Normalized` lets
/// "Pikachu" and "pikachu" share one cache entry. `CaseSensitive` hashes
/// the name exactly as typed, which means differently-cased inputs miss
/// the cache and hit the network again for the same catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    CaseSensitive,
    #[default]
    Normalized,
}

impl KeyPolicy {
    pub fn key_for(&self, name: &str) -> String {
        match self {
            KeyPolicy::CaseSensitive => cache_key(name),
            KeyPolicy::Normalized => cache_key(&name.to_lowercase()),
        }
    }
}

/// SHA-256 of the raw name, as 64 lowercase hex characters
pub fn cache_key(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}
