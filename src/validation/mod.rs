//! Validation of entities fetched from the catalog.
//!
//! A decoded payload can be well-typed and still unusable: an empty name
//! cannot serve as a cache key, and repeated stat names make display order
//! ambiguous. Checks use Stillwater's `Validation` so every problem with a
//! payload is reported at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use dexstore::core::{Entity, StatEntry};
//! use dexstore::validation::{check_entity, PayloadViolation};
//!
//! let entity = Entity::new("pikachu")
//!     .with_stat(StatEntry::new("hp", 35, 0))
//!     .with_stat(StatEntry::new("hp", 40, 0));
//!
//! let violations = check_entity(&entity).unwrap_err();
//! assert_eq!(
//!     violations,
//!     vec![PayloadViolation::DuplicateStat { name: "hp".to_string() }]
//! );
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_entity, validate_entity, PayloadValidation};
pub use violations::PayloadViolation;
