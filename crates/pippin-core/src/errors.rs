//! Cross-cutting error types for Pippin.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. Every board-level rejection that a caller can
//! act on is expressed here.

use thiserror::Error;

/// Errors raised by board rules, independent of storage.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result for the tenant.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The tenant already owns the maximum number of projects.
    #[error("Project limit reached: tenant {tenant} already owns {limit} projects")]
    LimitExceeded { tenant: String, limit: usize },

    /// A lifecycle move was outside the chain or used an unknown direction.
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// Data failed validation (unknown enum value, empty identifier).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
