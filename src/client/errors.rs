//! Request-time error types.
//!
//! This module contains the error types raised once a client starts talking
//! to the API:
//!
//! - [`AuthenticationError`]: token acquisition returned a non-200 status
//! - [`TransportError`]: a dispatched request returned a non-2xx status
//! - [`UnsupportedOperationError`]: a documented-but-unauthorized endpoint
//! - [`ApiError`]: unified error type encompassing all request-time errors
//!
//! The client performs no retries and no logging-and-swallowing: every
//! failure propagates to the immediate caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use digiseller_api::ApiError;
//!
//! match client.dialogs().list(Some(20)).await {
//!     Ok(dialogs) => println!("{} dialogs", dialogs.len()),
//!     Err(ApiError::Auth(e)) => println!("login rejected with {}", e.status),
//!     Err(ApiError::Transport(e)) => println!("{} from {}", e.code, e.endpoint),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when token acquisition fails.
///
/// Any non-200 response from the login endpoint is fatal to the in-flight
/// request; no retry is attempted. The raw response body is preserved for
/// diagnosis.
#[derive(Debug, Error)]
#[error("token acquisition failed with status {status}: {body}")]
pub struct AuthenticationError {
    /// The HTTP status code of the login response.
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

/// Error returned when a dispatched request receives a non-2xx response.
///
/// Raised by [`DigisellerClient::request`](crate::DigisellerClient::request)
/// unless the caller opted out via
/// [`request_unchecked`](crate::DigisellerClient::request_unchecked).
#[derive(Debug, Error)]
#[error("request to '{endpoint}' failed with status {code}: {body}")]
pub struct TransportError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The endpoint path the request was sent to.
    pub endpoint: String,
    /// The response body, serialized back to text.
    pub body: String,
}

/// Error returned for endpoints the seller API key cannot use.
///
/// Some documented endpoints are permanently disabled for API-key
/// authentication; calling them signals "not supported" instead of
/// guessing at a request shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{operation}' is not supported with API-key authentication")]
pub struct UnsupportedOperationError {
    /// The name of the unsupported operation.
    pub operation: &'static str,
}

/// Unified error type for all request-time failures.
///
/// This enum provides a single error type for API operations, making it
/// easier to handle errors at call sites. Use pattern matching to handle
/// specific error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Token acquisition failed.
    #[error(transparent)]
    Auth(#[from] AuthenticationError),

    /// A dispatched request returned a non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the documented shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation is permanently unsupported.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),
}
