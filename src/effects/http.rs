//! HTTP implementation of the lookup port.

use crate::config::{normalize_catalog_url, StoreConfig};
use crate::core::Entity;
use crate::effects::lookup::{EntityLookup, LookupError};
use async_trait::async_trait;
use std::time::Duration;

/// Lookup that fetches entities from a JSON catalog over HTTP.
///
/// Issues `GET {catalog_url}{name}`. A 2xx response is decoded as an
/// [`Entity`]; 404 maps to [`LookupError::NotFound`] and any other status to
/// [`LookupError::Status`].
pub struct HttpLookup {
    client: reqwest::Client,
    catalog_url: String,
    timeout: Duration,
}

impl HttpLookup {
    pub fn new(catalog_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            catalog_url: normalize_catalog_url(catalog_url),
            timeout: StoreConfig::default().request_timeout(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.catalog_url).with_timeout(config.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// URL for `name`, rejecting names that cannot form a single path segment.
    ///
    /// `.` and `..` are rejected as well: URL parsing would resolve them
    /// against the catalog path instead of sending them as a name.
    pub fn url_for(&self, name: &str) -> Result<String, LookupError> {
        if name.trim().is_empty() || name.contains(['/', '\\', '?', '#']) || is_dot_segment(name) {
            return Err(LookupError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(format!("{}{}", self.catalog_url, name))
    }
}

/// Dot segments, including the percent-encoded spellings URL parsing decodes.
fn is_dot_segment(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    matches!(
        lowered.as_str(),
        "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
    )
}

#[async_trait]
impl EntityLookup for HttpLookup {
    async fn fetch(&self, name: &str) -> Result<Entity, LookupError> {
        let url = self.url_for(name)?;
        tracing::debug!(%url, "requesting entity");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|error| LookupError::Transport(error.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| LookupError::Transport(error.to_string()))?;

        serde_json::from_slice(&body).map_err(|error| LookupError::Decode(error.to_string()))
    }
}
