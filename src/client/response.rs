//! Response type returned by the dispatcher.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A parsed API response: status code plus JSON body.
///
/// Resource wrappers extract their typed records from the body via
/// [`json`](Self::json); callers that opted out of the automatic status
/// check inspect [`code`](Self::code) themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body parsed as JSON.
    pub body: Value,
}

impl ApiResponse {
    /// Creates a new response from a status code and a parsed body.
    #[must_use]
    pub const fn new(code: u16, body: Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Deserializes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match the
    /// expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}
