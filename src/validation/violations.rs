//! Payload violation errors.

use thiserror::Error;

/// A rule a decoded entity failed to satisfy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadViolation {
    #[error("Entity name is empty")]
    EmptyName,

    #[error("Stat at position {index} has an empty name")]
    EmptyStatName { index: usize },

    #[error("Stat '{name}' appears more than once")]
    DuplicateStat { name: String },
}
