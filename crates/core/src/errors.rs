//! Core error types for the Inventaris engine.
//!
//! Calculations never fail: malformed stored data is recovered locally and
//! logged. These errors cover the operations that legitimately reject their
//! input, such as parsing an asset code or loading engine settings.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid asset code '{code}': {reason}")]
    InvalidCode { code: String, reason: String },

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Validation errors for user input and settings.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Value {value} for '{field}' is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },
}

impl Error {
    pub(crate) fn invalid_code(code: &str, reason: impl Into<String>) -> Self {
        Error::InvalidCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}
