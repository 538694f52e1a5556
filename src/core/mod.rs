//! Pure session core.
//!
//! This module contains the side-effect-free half of the store:
//! - Entity records and the entity cache
//! - The closed action set and the reducer over it
//! - Derived stat computation
//!
//! Nothing here performs I/O or reads the clock. Time only enters through
//! the timestamp carried by a [`CacheEntry`].

mod action;
mod cache;
mod entity;
mod reducer;
mod state;
mod stats;

pub use action::Action;
pub use cache::{CacheEntry, EntityCache};
pub use entity::{Entity, NamedResource, Sprites, StatEntry};
pub use reducer::reduce;
pub use state::{Level, SessionState};
pub use stats::{display_stat, displayed_stats, StatLine};
