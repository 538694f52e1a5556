//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::config::StoreConfig;
use crate::core::SessionState;
use crate::effects::{system_clock, Clock, EntityLookup, Store};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Builder for constructing stores with a fluent API.
pub struct StoreBuilder<L: EntityLookup> {
    lookup: Option<L>,
    initial: Option<SessionState>,
    cache_ttl: Option<Duration>,
    clock: Option<Clock>,
}

impl<L: EntityLookup> StoreBuilder<L> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            lookup: None,
            initial: None,
            cache_ttl: None,
            clock: None,
        }
    }

    /// Set the lookup consulted on cache misses (required).
    pub fn lookup(mut self, lookup: L) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Start from an existing snapshot instead of an empty session.
    pub fn initial(mut self, state: SessionState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Expire cache entries older than `ttl`.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Apply the store-level settings of a configuration.
    pub fn config(mut self, config: &StoreConfig) -> Self {
        self.cache_ttl = config.cache_ttl();
        self
    }

    /// Replace the system clock, e.g. to control cache expiry in tests.
    pub fn clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<L>, BuildError> {
        let lookup = self.lookup.ok_or(BuildError::MissingLookup)?;

        Ok(Store::from_parts(
            lookup,
            self.initial.unwrap_or_default(),
            self.cache_ttl,
            self.clock.unwrap_or_else(system_clock),
        ))
    }
}

impl<L: EntityLookup> Default for StoreBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: EntityLookup> Store<L> {
    /// Start building a store.
    pub fn builder() -> StoreBuilder<L> {
        StoreBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reduce, Action, Level};
    use crate::effects::InMemoryLookup;

    #[test]
    fn builder_validates_required_fields() {
        let result = StoreBuilder::<InMemoryLookup>::new().build();

        assert!(matches!(result, Err(BuildError::MissingLookup)));
    }

    #[test]
    fn fluent_api_builds_store() {
        let store = Store::builder()
            .lookup(InMemoryLookup::new())
            .cache_ttl(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(store.cache_ttl(), Some(Duration::from_secs(60)));
        assert_eq!(store.state().level, Level::INITIAL);
    }

    #[test]
    fn config_sets_cache_ttl() {
        let config = StoreConfig {
            cache_ttl_secs: Some(300),
            ..StoreConfig::default()
        };

        let store = StoreBuilder::new()
            .lookup(InMemoryLookup::new())
            .config(&config)
            .build()
            .unwrap();

        assert_eq!(store.cache_ttl(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn initial_state_is_used() {
        let initial = reduce(&SessionState::new(), Action::LevelUp);

        let store = StoreBuilder::new()
            .lookup(InMemoryLookup::new())
            .initial(initial.clone())
            .build()
            .unwrap();

        assert_eq!(*store.state(), initial);
    }
}
