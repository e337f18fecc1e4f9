//! Configuration types for the Digiseller API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with Digiseller.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DigisellerConfig`]: The main configuration struct holding all client settings
//! - [`DigisellerConfigBuilder`]: A builder for constructing [`DigisellerConfig`] instances
//! - [`SellerId`]: A validated seller identifier newtype
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use digiseller_api::{DigisellerConfig, SellerId, ApiKey};
//!
//! let config = DigisellerConfig::builder()
//!     .seller_id(SellerId::new(246810).unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, SellerId};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the Digiseller API.
pub const DEFAULT_BASE_URL: &str = "https://api.digiseller.ru/api";

/// Default auth token lifespan in seconds (120 minutes, per the API docs).
pub const DEFAULT_TOKEN_LIFESPAN: u64 = 7200;

/// Default transport timeout applied to every HTTP exchange.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Digiseller API client.
///
/// This struct holds all configuration needed for client operations: the
/// session credentials, base URL, token lifespan and transport timeout.
/// Credentials are immutable for the lifetime of the configuration.
///
/// # Thread Safety
///
/// `DigisellerConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use digiseller_api::{DigisellerConfig, SellerId, ApiKey};
///
/// let config = DigisellerConfig::builder()
///     .seller_id(SellerId::new(246810).unwrap())
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(10));
/// ```
#[derive(Clone, Debug)]
pub struct DigisellerConfig {
    seller_id: SellerId,
    api_key: ApiKey,
    base_url: String,
    token_lifespan: u64,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl DigisellerConfig {
    /// Creates a new builder for constructing a `DigisellerConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use digiseller_api::{DigisellerConfig, SellerId, ApiKey};
    ///
    /// let config = DigisellerConfig::builder()
    ///     .seller_id(SellerId::new(1).unwrap())
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> DigisellerConfigBuilder {
        DigisellerConfigBuilder::new()
    }

    /// Returns the seller id.
    #[must_use]
    pub const fn seller_id(&self) -> SellerId {
        self.seller_id
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the token lifespan in seconds.
    #[must_use]
    pub const fn token_lifespan(&self) -> u64 {
        self.token_lifespan
    }

    /// Returns the transport timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DigisellerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DigisellerConfig>();
};

/// Builder for constructing [`DigisellerConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `seller_id` and `api_key`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `token_lifespan`: [`DEFAULT_TOKEN_LIFESPAN`] (7200 seconds)
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use digiseller_api::{DigisellerConfig, SellerId, ApiKey};
///
/// let config = DigisellerConfig::builder()
///     .seller_id(SellerId::new(246810).unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .token_lifespan(600)
///     .timeout(Duration::from_secs(5))
///     .user_agent_prefix("MyShopTool/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DigisellerConfigBuilder {
    seller_id: Option<SellerId>,
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    token_lifespan: Option<u64>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DigisellerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seller id (required).
    #[must_use]
    pub const fn seller_id(mut self, id: SellerId) -> Self {
        self.seller_id = Some(id);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL of the API.
    ///
    /// Mainly useful for pointing the client at a test server. A trailing
    /// slash is stripped.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the token lifespan in seconds.
    ///
    /// A freshly acquired token is considered valid for this many seconds
    /// from the moment of acquisition, minus the 30-second safety margin
    /// applied at dispatch time.
    #[must_use]
    pub const fn token_lifespan(mut self, seconds: u64) -> Self {
        self.token_lifespan = Some(seconds);
        self
    }

    /// Sets the transport timeout applied to every HTTP exchange.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DigisellerConfig`], validating that required fields are
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `seller_id` or
    /// `api_key` are not set, and [`ConfigError::InvalidBaseUrl`] if a
    /// custom base URL is not an absolute http(s) URL.
    pub fn build(self) -> Result<DigisellerConfig, ConfigError> {
        let seller_id = self.seller_id.ok_or(ConfigError::MissingRequiredField {
            field: "seller_id",
        })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let base_url = match self.base_url {
            None => DEFAULT_BASE_URL.to_string(),
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidBaseUrl { url });
                }
                url
            }
        };

        Ok(DigisellerConfig {
            seller_id,
            api_key,
            base_url,
            token_lifespan: self.token_lifespan.unwrap_or(DEFAULT_TOKEN_LIFESPAN),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
