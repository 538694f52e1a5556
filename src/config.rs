//! Store configuration and loaders.
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Catalog queried when nothing else is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration for a store and its HTTP lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL; the entity name is appended to it
    pub catalog_url: String,
    pub request_timeout_secs: u64,
    /// Cache entries older than this are re-fetched. `None` keeps them for the
    /// whole session.
    pub cache_ttl_secs: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cache_ttl_secs: None,
        }
    }
}

impl StoreConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DEXSTORE_CATALOG_URL`
    /// - `DEXSTORE_REQUEST_TIMEOUT_SECS`
    /// - `DEXSTORE_CACHE_TTL_SECS` (`0` disables expiry)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable source.
    ///
    /// Unset or unparseable values keep their defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = var("DEXSTORE_CATALOG_URL").filter(|url| !url.trim().is_empty()) {
            config.catalog_url = normalize_catalog_url(&url);
        }

        if let Some(secs) = read_var::<u64, _>(&var, "DEXSTORE_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = secs.max(1);
        }

        if let Some(secs) = read_var::<u64, _>(&var, "DEXSTORE_CACHE_TTL_SECS") {
            config.cache_ttl_secs = (secs > 0).then_some(secs);
        }

        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Cache expiry, if any. A TTL of zero seconds means no expiry.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}

/// Trim the URL and make sure it ends with exactly one `/`.
pub fn normalize_catalog_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}

fn read_var<T, F>(var: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    var(key).and_then(|value| value.trim().parse().ok())
}
