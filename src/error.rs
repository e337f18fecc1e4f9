//! Error types for client configuration.
//!
//! This module contains the error type used for configuration and
//! construction-time validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Invalid credentials are rejected when the client is
//! built, never at request time.
//!
//! # Example
//!
//! ```rust
//! use digiseller_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("   ");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration values. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The seller id is not a positive integer.
    #[error("Invalid seller id '{value}'. Expected a positive integer identifier.")]
    InvalidSellerId {
        /// The invalid value that was provided.
        value: String,
    },

    /// The API key is empty or whitespace-only.
    #[error("API key cannot be empty. Please provide a valid Digiseller API key.")]
    EmptyApiKey,

    /// The base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
