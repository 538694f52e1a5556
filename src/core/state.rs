//! Session state snapshot.
//!
//! A `SessionState` is an immutable value. Every accepted action produces a
//! new snapshot; nothing edits a snapshot in place.

use super::cache::EntityCache;
use super::entity::Entity;
use super::stats::{displayed_stats, StatLine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Level multiplier applied to derived stats. Always at least 1.
///
/// # Example
///
/// ```rust
/// use dexstore::core::Level;
///
/// let level = Level::INITIAL;
/// assert_eq!(level.get(), 1);
/// assert_eq!(level.next().get(), 2);
/// assert_eq!(Level::new(0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    /// Level of a freshly selected entity.
    pub const INITIAL: Level = Level(1);

    /// Create a level, rejecting zero.
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Level(value))
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The following level. Saturates at `u32::MAX`.
    pub const fn next(self) -> Self {
        Level(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Level {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Level::new(value).ok_or_else(|| "level must be at least 1".to_string())
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// The single authoritative aggregate of a session.
///
/// - `current`: the entity on display, `None` until the first selection
/// - `cache`: every entity looked up this session
/// - `level`: multiplier for derived stats, reset on every selection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current: Option<Arc<Entity>>,
    pub cache: EntityCache,
    pub level: Level,
}

impl SessionState {
    /// Fresh session: nothing selected, empty cache, level 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Entity> {
        self.current.as_deref()
    }

    /// Name of the selected entity, if any.
    pub fn current_name(&self) -> Option<&str> {
        self.current().map(|entity| entity.name.as_str())
    }

    /// Display values for the current entity at the current level.
    ///
    /// Empty when nothing is selected.
    pub fn displayed_stats(&self) -> Vec<StatLine> {
        self.current()
            .map(|entity| displayed_stats(entity, self.level))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatEntry;

    #[test]
    fn initial_state_is_empty_at_level_one() {
        let state = SessionState::new();

        assert!(state.current.is_none());
        assert!(state.cache.is_empty());
        assert_eq!(state.level, Level::INITIAL);
        assert!(state.displayed_stats().is_empty());
    }

    #[test]
    fn level_rejects_zero() {
        assert!(Level::new(0).is_none());
        assert_eq!(Level::new(3).map(Level::get), Some(3));
    }

    #[test]
    fn level_next_saturates() {
        let max = Level::new(u32::MAX).unwrap();
        assert_eq!(max.next(), max);
    }

    #[test]
    fn level_deserialization_rejects_zero() {
        assert!(serde_json::from_str::<Level>("0").is_err());
        assert_eq!(serde_json::from_str::<Level>("4").unwrap().get(), 4);
    }

    #[test]
    fn displayed_stats_follow_current_entity() {
        let entity = Entity::new("pikachu").with_stat(StatEntry::new("speed", 90, 2));
        let state = SessionState {
            current: Some(Arc::new(entity)),
            cache: EntityCache::new(),
            level: Level::new(2).unwrap(),
        };

        let lines = state.displayed_stats();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "speed");
        assert_eq!(lines[0].value, 108);
        assert_eq!(state.current_name(), Some("pikachu"));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = SessionState {
            current: Some(Arc::new(Entity::new("eevee"))),
            cache: EntityCache::new(),
            level: Level::new(5).unwrap(),
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
