//! Configuration error types.

use thiserror::Error;

/// Start-up configuration failures. All of them are fatal: the process must
/// not serve with an invalid sprint epoch or length.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
