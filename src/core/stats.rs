//! Derived stat computation.

use super::entity::Entity;
use super::state::Level;
use serde::{Deserialize, Serialize};

/// Displayed value of a base stat at a level.
///
/// `base + level * floor(base / 10)`, saturating at `u32::MAX`. Level never
/// drops below 1, so the raw base value is never what gets displayed.
///
/// # Example
///
/// ```rust
/// use dexstore::core::{display_stat, Level};
///
/// assert_eq!(display_stat(45, Level::INITIAL), 49);
/// assert_eq!(display_stat(100, Level::new(5).unwrap()), 150);
/// ```
pub fn display_stat(base_value: u32, level: Level) -> u32 {
    base_value.saturating_add(level.get().saturating_mul(base_value / 10))
}

/// One rendered stat row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub name: String,
    pub value: u32,
}

/// Compute every stat of `entity` at `level`, in the entity's stat order.
pub fn displayed_stats(entity: &Entity, level: Level) -> Vec<StatLine> {
    entity
        .stats
        .iter()
        .map(|stat| StatLine {
            name: stat.name().to_string(),
            value: display_stat(stat.base_value, level),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatEntry;

    fn level(n: u32) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn formula_matches_reference_values() {
        assert_eq!(display_stat(45, level(1)), 49);
        assert_eq!(display_stat(45, level(3)), 57);
        assert_eq!(display_stat(100, level(5)), 150);
        assert_eq!(display_stat(90, level(1)), 99);
        assert_eq!(display_stat(90, level(2)), 108);
    }

    #[test]
    fn small_base_values_get_no_bonus() {
        assert_eq!(display_stat(0, level(7)), 0);
        assert_eq!(display_stat(9, level(100)), 9);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(display_stat(u32::MAX, level(2)), u32::MAX);
        assert_eq!(display_stat(1_000, level(u32::MAX)), u32::MAX);
    }

    #[test]
    fn displayed_stats_preserve_order() {
        let entity = Entity::new("bulbasaur")
            .with_stat(StatEntry::new("hp", 45, 0))
            .with_stat(StatEntry::new("attack", 49, 0))
            .with_stat(StatEntry::new("special-attack", 65, 1));

        let lines = displayed_stats(&entity, level(2));
        let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
        let values: Vec<u32> = lines.iter().map(|l| l.value).collect();

        assert_eq!(names, vec!["hp", "attack", "special-attack"]);
        assert_eq!(values, vec![53, 57, 77]);
    }

    #[test]
    fn entity_without_stats_renders_nothing() {
        assert!(displayed_stats(&Entity::new("missingno"), level(1)).is_empty());
    }
}
