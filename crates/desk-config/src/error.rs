//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section is missing a value it needs before it can be used.
    #[error("Configuration section '{section}' is not configured: '{field}' is empty")]
    NotConfigured { section: String, field: String },

    /// A configuration field has a value outside its accepted set.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
