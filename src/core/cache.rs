//! Session-scoped entity cache.
//!
//! The cache is immutable: `put` returns a new cache with the entry set,
//! leaving the original untouched. Entities are shared behind `Arc`, so
//! copying a cache copies pointers, not records.

use super::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// A cached entity together with the time it was fetched.
///
/// The timestamp travels with the entry through cache hits, so re-selecting a
/// cached entity never makes it look fresher than it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub entity: Arc<Entity>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(entity: Entity, fetched_at: DateTime<Utc>) -> Self {
        Self {
            entity: Arc::new(entity),
            fetched_at,
        }
    }

    /// Cache key for this entry.
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Whether the entry is older than `ttl` at `now`.
    ///
    /// An entry stamped in the future (clock skew) is never expired.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at)
            .to_std()
            .is_ok_and(|age| age > ttl)
    }
}

/// Mapping from exact entity name to its most recent lookup.
///
/// Names are case-sensitive. Entries are never dropped implicitly; they are
/// overwritten by a newer `put` for the same name or removed all at once by
/// [`EntityCache::clear`].
///
/// # Example
///
/// ```rust
/// use dexstore::core::{CacheEntry, Entity, EntityCache};
/// use chrono::Utc;
///
/// let cache = EntityCache::new();
/// let updated = cache.put(CacheEntry::new(Entity::new("pikachu"), Utc::now()));
///
/// assert!(updated.get("pikachu").is_some());
/// assert!(updated.get("Pikachu").is_none());
/// assert!(cache.is_empty()); // Original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCache {
    entries: BTreeMap<String, CacheEntry>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by exact name. Pure, no side effects.
    pub fn get(&self, name: &str) -> Option<&CacheEntry> {
        self.entries.get(name)
    }

    /// Look up an entry, treating it as absent once older than `ttl`.
    ///
    /// `ttl = None` means entries never expire.
    pub fn get_fresh(
        &self,
        name: &str,
        now: DateTime<Utc>,
        ttl: Option<Duration>,
    ) -> Option<&CacheEntry> {
        self.get(name)
            .filter(|entry| ttl.is_none_or(|ttl| !entry.is_expired(now, ttl)))
    }

    /// Return a new cache with `entry` stored under its entity's name.
    ///
    /// Any previous entry for that name is replaced, not merged.
    pub fn put(&self, entry: CacheEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(entry.name().to_string(), entry);
        Self { entries }
    }

    /// Return an empty cache.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
