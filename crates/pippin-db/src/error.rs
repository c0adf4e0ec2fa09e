//! Database error types for pippin-db.

use pippin_core::errors::CoreError;
use thiserror::Error;

/// Errors from board operations backed by the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A board rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error (constraint violations included).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Coarse classification for callers that map failures to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    LimitExceeded,
    InvalidMove,
    /// Caller-supplied data failed validation.
    Invalid,
    /// Constraint violation or storage failure; the message is passed through.
    Persistence,
}

impl DatabaseError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(CoreError::NotFound { .. }) => ErrorKind::NotFound,
            Self::Core(CoreError::LimitExceeded { .. }) => ErrorKind::LimitExceeded,
            Self::Core(CoreError::InvalidMove(_)) => ErrorKind::InvalidMove,
            Self::Core(CoreError::Validation(_)) => ErrorKind::Invalid,
            Self::Core(CoreError::Other(_))
            | Self::Query(_)
            | Self::Migration(_)
            | Self::NoResult
            | Self::LibSql(_)
            | Self::Other(_) => ErrorKind::Persistence,
        }
    }
}
