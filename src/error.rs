//! Error types for termctx
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for termctx
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// Page number out of range
    #[error("Invalid pageNum {value}: must be greater than 0")]
    InvalidPageNum { value: u32 },

    /// Page size out of range
    #[error("Invalid maxPageSize {value}: must be greater than 0")]
    InvalidPageSize { value: u32 },

    // ============================================================================
    // Request Parameter Errors
    // ============================================================================
    /// A request parameter could not be parsed into its typed field
    #[error("Invalid value '{value}' for parameter '{name}': {message}")]
    Parameter {
        name: String,
        value: String,
        message: String,
    },

    // ============================================================================
    // Coordinate Token Errors
    // ============================================================================
    /// A token string does not parse into the expected field layout
    #[error("Malformed coordinate token: {message}")]
    MalformedToken { message: String },

    /// A token string carries an unrecognized format version
    #[error("Unsupported coordinate token version '{version}'")]
    UnsupportedTokenVersion { version: char },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Bad value in operator configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// YAML document failed to parse
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON document failed to parse or serialize
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Free-form error message
    #[error("{0}")]
    Other(String),

    /// Wrapped error from a caller-supplied component
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a parameter error naming the offending parameter and raw value
    pub fn parameter(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Parameter {
            name: name.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a malformed token error
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::MalformedToken {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is attributable to bad caller input
    ///
    /// Client errors are reported back to the caller and are safe to retry
    /// with corrected input. They are never retried internally and never
    /// silently defaulted.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPageNum { .. }
                | Error::InvalidPageSize { .. }
                | Error::Parameter { .. }
                | Error::MalformedToken { .. }
                | Error::UnsupportedTokenVersion { .. }
        )
    }
}

/// Result type alias for termctx
pub type Result<T> = std::result::Result<T, Error>;
