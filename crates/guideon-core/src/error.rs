// ── Core error types ──
//
// User-facing errors from guideon-core. The variant set is the in-memory
// subset of the platform API's error taxonomy -- the rest (auth, conflict,
// rate-limit, ...) only exists server-side and has no meaning here.

use std::fmt;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input rejected before it reached any collection.
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// An operation referenced an identity that is not in the collection.
    /// The collection is left unchanged.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl CoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
