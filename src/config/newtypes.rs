//! Validated newtype wrappers for credential values.
//!
//! This module provides type-safe wrappers around the two session
//! credentials that validate their contents on construction. Invalid values
//! are rejected with clear error messages before any request is made.

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A validated Digiseller seller identifier.
///
/// This newtype ensures the seller id is a positive integer and provides
/// type safety to prevent accidental misuse of raw numbers. Seller ids that
/// arrive as text (e.g. from a configuration file) can be parsed via
/// [`FromStr`].
///
/// # Example
///
/// ```rust
/// use digiseller_api::SellerId;
///
/// let id = SellerId::new(246_810).unwrap();
/// assert_eq!(id.get(), 246_810);
///
/// let parsed: SellerId = "246810".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SellerId(u64);

impl SellerId {
    /// Creates a new validated seller id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSellerId`] if the id is zero.
    pub fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidSellerId {
                value: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    /// Returns the numeric seller id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for SellerId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidSellerId {
                value: s.to_string(),
            })
            .and_then(Self::new)
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Digiseller API key.
///
/// This newtype ensures the key is non-empty (whitespace-only keys are
/// rejected) and masks its value in debug output to prevent accidental
/// exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use digiseller_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or contains
    /// only whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_id_accepts_positive_integer() {
        let id = SellerId::new(123).unwrap();
        assert_eq!(id.get(), 123);
    }

    #[test]
    fn test_seller_id_rejects_zero() {
        let result = SellerId::new(0);
        assert!(matches!(result, Err(ConfigError::InvalidSellerId { .. })));
    }

    #[test]
    fn test_seller_id_parses_from_decimal_string() {
        let id: SellerId = " 4521 ".parse().unwrap();
        assert_eq!(id.get(), 4521);
    }

    #[test]
    fn test_seller_id_rejects_non_numeric_string() {
        let result: Result<SellerId, _> = "abc".parse();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSellerId { value }) if value == "abc"
        ));

        let result: Result<SellerId, _> = "".parse();
        assert!(matches!(result, Err(ConfigError::InvalidSellerId { .. })));

        let result: Result<SellerId, _> = "-5".parse();
        assert!(matches!(result, Err(ConfigError::InvalidSellerId { .. })));
    }

    #[test]
    fn test_seller_id_serializes_as_number() {
        let id = SellerId::new(777).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "777");
    }

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_rejects_whitespace_only_string() {
        let result = ApiKey::new("   \t ");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_api_key_preserves_inner_whitespace() {
        // Keys are used verbatim for signing, only fully blank input is invalid
        let key = ApiKey::new("key with spaces").unwrap();
        assert_eq!(key.as_ref(), "key with spaces");
    }
}
