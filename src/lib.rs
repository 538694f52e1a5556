//! Dexstore: a pure functional state and cache store for catalog lookups
//!
//! Dexstore follows the "pure core, imperative shell" philosophy. The session
//! logic (selecting an entity, levelling it up, caching lookups) is a pure
//! reducer over immutable snapshots, while fetching from the remote catalog is
//! isolated behind an async lookup port owned by the store.
//!
//! # Core Concepts
//!
//! - **Entity**: an immutable creature record with ordered base stats
//! - **Cache**: entities looked up this session, keyed by exact name
//! - **Reducer**: the single transition function over a closed action set
//! - **Store**: owns the current snapshot and talks to the lookup
//!
//! # Example
//!
//! ```rust
//! use dexstore::core::{Entity, StatEntry};
//! use dexstore::effects::{InMemoryLookup, SearchOutcome, Store};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let lookup = InMemoryLookup::new()
//!     .with_entity(Entity::new("pikachu").with_stat(StatEntry::new("speed", 90, 2)));
//! let store = Store::new(lookup);
//!
//! assert_eq!(store.search("pikachu").await, Ok(SearchOutcome::Fetched));
//! assert_eq!(store.state().displayed_stats()[0].value, 99);
//!
//! store.level_up();
//! assert_eq!(store.state().displayed_stats()[0].value, 108);
//!
//! // Second search is served from the cache and resets the level
//! assert_eq!(store.search("pikachu").await, Ok(SearchOutcome::CacheHit));
//! assert_eq!(store.state().displayed_stats()[0].value, 99);
//! assert_eq!(store.lookup().calls(), 1);
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{display_stat, reduce, Action, Entity, Level, SessionState, StatEntry};
pub use builder::StoreBuilder;
pub use config::StoreConfig;
pub use effects::{EntityLookup, LookupError, SearchOutcome, Store, StoreError};
