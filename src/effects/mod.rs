//! Effectful shell around the pure session core.
//!
//! This module owns everything with side effects: the lookup port that talks
//! to the catalog, and the store that holds the authoritative session state.
//!
//! # Key Concepts
//!
//! - **Lookup**: async port consulted on cache misses only
//! - **Store**: owns the state, runs the reducer, notifies observers
//! - **Search ordering**: results of superseded searches are dropped
//!
//! The HTTP lookup is available with the `http` feature (enabled by default).

mod error;
#[cfg(feature = "http")]
mod http;
mod lookup;
mod store;

pub use error::StoreError;
#[cfg(feature = "http")]
pub use http::HttpLookup;
pub use lookup::{EntityLookup, InMemoryLookup, LookupError};
pub use store::{Clock, SearchOutcome, Store};
pub(crate) use store::system_clock;
