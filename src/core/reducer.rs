//! The session transition function.

use super::action::Action;
use super::state::{Level, SessionState};

/// Compute the next session state for an action.
///
/// This is a pure function: no I/O, no clock, no shared state. The input
/// snapshot is left untouched and a new one is returned.
///
/// | Action | Effect |
/// |---|---|
/// | `LevelUp` | level + 1 |
/// | `SelectEntity(entry)` | current = entry, cache = cache.put(entry), level = 1 |
/// | `ClearCache` | cache emptied |
/// | `Unrecognized` | none |
///
/// # Example
///
/// ```rust
/// use dexstore::core::{reduce, Action, CacheEntry, Entity, SessionState};
/// use chrono::Utc;
///
/// let state = SessionState::new();
/// let entry = CacheEntry::new(Entity::new("pikachu"), Utc::now());
///
/// let state = reduce(&state, Action::SelectEntity(entry.clone()));
/// let state = reduce(&state, Action::LevelUp);
/// assert_eq!(state.level.get(), 2);
///
/// // Re-selecting the same entity still resets the level
/// let state = reduce(&state, Action::SelectEntity(entry));
/// assert_eq!(state.level.get(), 1);
/// assert_eq!(state.current_name(), Some("pikachu"));
/// ```
pub fn reduce(state: &SessionState, action: Action) -> SessionState {
    match action {
        Action::LevelUp => SessionState {
            level: state.level.next(),
            ..state.clone()
        },
        Action::SelectEntity(entry) => SessionState {
            current: Some(entry.entity.clone()),
            cache: state.cache.put(entry),
            level: Level::INITIAL,
        },
        Action::ClearCache => SessionState {
            cache: state.cache.clear(),
            ..state.clone()
        },
        Action::Unrecognized => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CacheEntry, Entity, StatEntry};
    use chrono::Utc;

    fn entry(name: &str) -> CacheEntry {
        CacheEntry::new(
            Entity::new(name).with_stat(StatEntry::new("speed", 90, 2)),
            Utc::now(),
        )
    }

    fn selected(name: &str) -> SessionState {
        reduce(&SessionState::new(), Action::SelectEntity(entry(name)))
    }

    #[test]
    fn level_up_increments_only_level() {
        let state = selected("pikachu");
        let next = reduce(&state, Action::LevelUp);

        assert_eq!(next.level.get(), state.level.get() + 1);
        assert_eq!(next.current, state.current);
        assert_eq!(next.cache, state.cache);
    }

    #[test]
    fn level_up_without_selection_still_increments() {
        let next = reduce(&SessionState::new(), Action::LevelUp);

        assert_eq!(next.level.get(), 2);
        assert!(next.current.is_none());
    }

    #[test]
    fn select_sets_current_and_caches() {
        let state = selected("pikachu");

        assert_eq!(state.current_name(), Some("pikachu"));
        assert!(state.cache.contains("pikachu"));
        assert_eq!(state.level, Level::INITIAL);
    }

    #[test]
    fn select_resets_level() {
        let state = selected("pikachu");
        let state = reduce(&state, Action::LevelUp);
        let state = reduce(&state, Action::LevelUp);
        assert_eq!(state.level.get(), 3);

        let state = reduce(&state, Action::SelectEntity(entry("eevee")));
        assert_eq!(state.level, Level::INITIAL);
        assert_eq!(state.current_name(), Some("eevee"));
        assert_eq!(state.cache.len(), 2);
    }

    #[test]
    fn reselecting_same_entity_resets_level() {
        let first = entry("pikachu");
        let state = reduce(&SessionState::new(), Action::SelectEntity(first.clone()));
        let state = reduce(&state, Action::LevelUp);

        let state = reduce(&state, Action::SelectEntity(first));
        assert_eq!(state.level, Level::INITIAL);
        assert_eq!(state.cache.len(), 1);
    }

    #[test]
    fn select_replaces_cached_entry() {
        let state = selected("pikachu");
        let refetched = CacheEntry::new(
            Entity::new("pikachu").with_stat(StatEntry::new("speed", 95, 2)),
            Utc::now(),
        );

        let state = reduce(&state, Action::SelectEntity(refetched.clone()));
        assert_eq!(state.cache.get("pikachu"), Some(&refetched));
        assert_eq!(state.current.as_deref(), Some(refetched.entity.as_ref()));
    }

    #[test]
    fn clear_cache_keeps_selection_and_level() {
        let state = reduce(&selected("pikachu"), Action::LevelUp);
        let next = reduce(&state, Action::ClearCache);

        assert!(next.cache.is_empty());
        assert_eq!(next.current, state.current);
        assert_eq!(next.level, state.level);
    }

    #[test]
    fn unrecognized_action_is_noop() {
        let state = reduce(&selected("pikachu"), Action::LevelUp);
        assert_eq!(reduce(&state, Action::Unrecognized), state);
    }

    #[test]
    fn reduce_does_not_modify_input() {
        let state = selected("pikachu");
        let before = state.clone();

        let _ = reduce(&state, Action::SelectEntity(entry("eevee")));
        let _ = reduce(&state, Action::ClearCache);

        assert_eq!(state, before);
    }

    #[test]
    fn reduce_is_deterministic() {
        let state = selected("pikachu");
        let action = Action::SelectEntity(entry("eevee"));

        assert_eq!(reduce(&state, action.clone()), reduce(&state, action));
    }
}
