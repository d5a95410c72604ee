// ⚙️ Runtime configuration - optional JSON file, every field defaulted

use crate::catalog::DEFAULT_BASE_URL;
use crate::db::DEFAULT_DB_PATH;
use crate::hasher::KeyPolicy;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog host, without the `/api/v2/...` path
    pub api_base_url: String,

    /// SQLite file receiving battle results
    pub database_path: PathBuf,

    /// Cache key derivation
    pub key_policy: KeyPolicy,

    /// Request timeout in seconds. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            key_policy: KeyPolicy::default(),
            timeout_secs: None,
        }
    }
}

/// Command-line values layered over the file config. `None` / `false`
/// leaves the file (or default) value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub database_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub case_sensitive_keys: bool,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Apply command-line overrides; set flags win over file values
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(path) = overrides.database_path {
            self.database_path = path;
        }
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = url;
        }
        if overrides.case_sensitive_keys {
            self.key_policy = KeyPolicy::CaseSensitive;
        }
        if overrides.timeout_secs.is_some() {
            self.timeout_secs = overrides.timeout_secs;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
