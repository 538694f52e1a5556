//! Store error types.

use crate::effects::lookup::LookupError;
use thiserror::Error;

/// Errors surfaced by store operations.
///
/// A failed search leaves the session state exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Lookup for '{name}' failed: {source}")]
    LookupFailed {
        name: String,
        #[source]
        source: LookupError,
    },
}
