//! Remote lookup port.

use crate::core::Entity;
use crate::validation::PayloadViolation;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Errors a lookup can fail with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No entity named '{name}' in the catalog")]
    NotFound { name: String },

    #[error("'{name}' is not a valid lookup name")]
    InvalidName { name: String },

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Catalog responded with HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed catalog payload: {0}")]
    Decode(String),

    #[error("Catalog payload failed validation: {}", join_violations(.violations))]
    Invalid { violations: Vec<PayloadViolation> },
}

fn join_violations(violations: &[PayloadViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Source of entities for cache misses.
///
/// Implementations own the transport and decoding. The store calls `fetch`
/// exactly once per cache miss and never retries.
#[async_trait]
pub trait EntityLookup: Send + Sync {
    /// Fetch the entity registered under `name`.
    async fn fetch(&self, name: &str) -> Result<Entity, LookupError>;
}

#[async_trait]
impl<L: EntityLookup + ?Sized> EntityLookup for Arc<L> {
    async fn fetch(&self, name: &str) -> Result<Entity, LookupError> {
        (**self).fetch(name).await
    }
}

/// Lookup backed by a fixed in-memory catalog.
///
/// Counts every `fetch` call, which makes it suitable for checking how often
/// the store actually reaches for its port.
#[derive(Debug, Default)]
pub struct InMemoryLookup {
    entities: HashMap<String, Entity>,
    failures: HashMap<String, LookupError>,
    calls: AtomicUsize,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under its own name.
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    /// Make lookups of `name` fail with `error`.
    pub fn with_failure(mut self, name: impl Into<String>, error: LookupError) -> Self {
        self.failures.insert(name.into(), error);
        self
    }

    /// Number of `fetch` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityLookup for InMemoryLookup {
    async fn fetch(&self, name: &str) -> Result<Entity, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.failures.get(name) {
            return Err(error.clone());
        }

        self.entities
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })
    }
}
