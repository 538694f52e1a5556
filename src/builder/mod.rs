//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder for assembling a store from a
//! lookup, an optional configuration and an optional clock.

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;

#[cfg(feature = "http")]
use crate::config::StoreConfig;
#[cfg(feature = "http")]
use crate::core::SessionState;
#[cfg(feature = "http")]
use crate::effects::{system_clock, HttpLookup, Store};

/// Create a store that looks entities up over HTTP.
///
/// # Example
///
/// ```no_run
/// use dexstore::builder::http_store;
/// use dexstore::config::StoreConfig;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let store = http_store(&StoreConfig::from_env());
/// store.search("pikachu").await?;
/// store.level_up();
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "http")]
pub fn http_store(config: &StoreConfig) -> Store<HttpLookup> {
    Store::from_parts(
        HttpLookup::from_config(config),
        SessionState::new(),
        config.cache_ttl(),
        system_clock(),
    )
}
