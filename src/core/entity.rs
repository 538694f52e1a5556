//! Catalog entity records.
//!
//! Entities are immutable values once fetched. The store only ever replaces
//! them wholesale, never edits them in place.

use serde::{Deserialize, Serialize};

/// A reference to another catalog resource, as returned by the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Sprite URLs for an entity. The catalog may omit any of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

/// A single named base stat.
///
/// Serialized the way the catalog ships it:
/// `{ "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "..." } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Unmodified stat value
    #[serde(rename = "base_stat")]
    pub base_value: u32,
    /// Effort weight
    #[serde(default)]
    pub effort: u32,
    /// Which stat this is
    pub stat: NamedResource,
}

impl StatEntry {
    /// Create a stat entry with no resource URL.
    pub fn new(name: impl Into<String>, base_value: u32, effort: u32) -> Self {
        Self {
            base_value,
            effort,
            stat: NamedResource {
                name: name.into(),
                url: String::new(),
            },
        }
    }

    /// The stat's name, unique within its entity.
    pub fn name(&self) -> &str {
        &self.stat.name
    }
}

/// A creature record looked up from the catalog.
///
/// The name is the cache key. Stat order is display order and is preserved
/// through serialization and caching.
///
/// # Example
///
/// ```rust
/// use dexstore::core::{Entity, StatEntry};
///
/// let pikachu = Entity::new("pikachu")
///     .with_stat(StatEntry::new("hp", 35, 0))
///     .with_stat(StatEntry::new("speed", 90, 2));
///
/// assert_eq!(pikachu.stats[1].name(), "speed");
/// assert_eq!(pikachu.stat("hp").map(|s| s.base_value), Some(35));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

impl Entity {
    /// Create an entity with no sprites and no stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sprites: Sprites::default(),
            stats: Vec::new(),
        }
    }

    /// Append a stat, keeping insertion order.
    pub fn with_stat(mut self, stat: StatEntry) -> Self {
        self.stats.push(stat);
        self
    }

    pub fn with_sprites(mut self, sprites: Sprites) -> Self {
        self.sprites = sprites;
        self
    }

    /// Find a stat by name.
    pub fn stat(&self, name: &str) -> Option<&StatEntry> {
        self.stats.iter().find(|s| s.name() == name)
    }
}
