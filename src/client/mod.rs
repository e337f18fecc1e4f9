//! HTTP client for Digiseller API communication.
//!
//! This module provides the [`DigisellerClient`] type: the central gateway
//! every resource wrapper dispatches through. The client guarantees that
//! every outbound request carries a non-expired auth token, builds the HTTP
//! request with method-dependent parameter placement, sends it over a
//! shared connection pool and surfaces any failure to the caller.

mod errors;
mod params;
mod response;

pub use errors::{ApiError, AuthenticationError, TransportError, UnsupportedOperationError};
pub use params::Params;
pub use response::ApiResponse;

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;
use serde::Serialize;

use crate::auth::signature::compute_sign;
use crate::auth::token::{AuthToken, TokenCache, TokenResponse};
use crate::config::DigisellerConfig;
use crate::resources::{Dialogs, Operations, Products, Statistics};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods used by the Digiseller API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET: all parameters travel in the URL query.
    Get,
    /// HTTP POST: the token travels in the query, parameters in a JSON body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Login request body for the `apilogin` endpoint.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    seller_id: u64,
    timestamp: i64,
    sign: &'a str,
}

/// Client for the Digiseller seller API.
///
/// The client handles:
/// - Lazy token acquisition and traffic-driven refresh (30-second safety
///   margin before the nominal expiry)
/// - Method-dependent parameter placement (GET query vs. POST JSON body)
/// - Raising [`TransportError`] for non-2xx responses unless the caller
///   opts out via [`request_unchecked`](Self::request_unchecked)
///
/// It performs no retries, no backoff and no caching of resource data:
/// resilience is explicitly a consumer concern.
///
/// # Thread Safety
///
/// `DigisellerClient` is `Send + Sync`. The token slot sits behind an async
/// `RwLock`, so independent tasks sharing one client never observe a torn
/// token and at most one login runs at a time.
///
/// # Example
///
/// ```rust,ignore
/// use digiseller_api::{ApiKey, DigisellerClient, DigisellerConfig, SellerId};
///
/// let config = DigisellerConfig::builder()
///     .seller_id(SellerId::new(246810)?)
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
/// let client = DigisellerClient::new(config);
///
/// let dialogs = client.dialogs().list(Some(20)).await?;
/// let categories = client.products().categories(&Default::default()).await?;
/// ```
#[derive(Debug)]
pub struct DigisellerClient {
    /// The internal reqwest HTTP client (shared connection pool).
    http: reqwest::Client,
    /// Immutable session configuration.
    config: DigisellerConfig,
    /// The current auth token, replaced wholesale on refresh.
    token: TokenCache,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify DigisellerClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DigisellerClient>();
};

impl DigisellerClient {
    /// Creates a new client from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: DigisellerConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Digiseller API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            config,
            token: TokenCache::default(),
            default_headers,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &DigisellerConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the dialogs resource wrapper.
    #[must_use]
    pub const fn dialogs(&self) -> Dialogs<'_> {
        Dialogs::new(self)
    }

    /// Returns the account operations resource wrapper.
    #[must_use]
    pub const fn operations(&self) -> Operations<'_> {
        Operations::new(self)
    }

    /// Returns the product catalog resource wrapper.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Returns the sales statistics resource wrapper.
    #[must_use]
    pub const fn statistics(&self) -> Statistics<'_> {
        Statistics::new(self)
    }

    /// Sends a request, raising on any non-2xx status.
    ///
    /// Ensures a valid token first (acquiring one if none is held or the
    /// current one is within 30 seconds of expiry), then dispatches:
    /// GET places the token and all parameters in the URL query, POST
    /// places the token in the query and the parameters in a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Token acquisition fails (`Auth`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Transport`)
    pub async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Params,
    ) -> Result<ApiResponse, ApiError> {
        let response = self.dispatch(method, endpoint, params).await?;
        if response.is_ok() {
            Ok(response)
        } else {
            Err(TransportError {
                code: response.code,
                endpoint: endpoint.to_string(),
                body: response.body.to_string(),
            }
            .into())
        }
    }

    /// Sends a request without raising on non-2xx statuses.
    ///
    /// Soft-fail entry point for callers that inspect the status code
    /// themselves (e.g. a status-change call whose outcome is a boolean).
    /// Token refresh and parameter placement behave exactly as in
    /// [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] only for token acquisition failures and
    /// network-level errors; HTTP error statuses are returned as a normal
    /// [`ApiResponse`].
    pub async fn request_unchecked(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(method, endpoint, params).await
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Params,
    ) -> Result<ApiResponse, ApiError> {
        let token = self.ensure_token().await?;
        let url = self.endpoint_url(endpoint);

        let mut builder = match method {
            HttpMethod::Get => {
                let mut query = params.to_query();
                query.push(("token".to_string(), token));
                self.http.get(&url).query(&query)
            }
            HttpMethod::Post => self
                .http
                .post(&url)
                .query(&[("token", token.as_str())])
                .json(&params.into_body()),
        };

        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();

        let body = if text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
        };

        Ok(ApiResponse::new(code, body))
    }

    /// Returns a token valid for at least the safety margin, acquiring a
    /// fresh one when none is held or the current one is stale.
    async fn ensure_token(&self) -> Result<String, ApiError> {
        if let Some(token) = self.token.fresh(Utc::now().timestamp()).await {
            return Ok(token);
        }

        let mut slot = self.token.lock().await;

        // Another caller may have refreshed while we waited for the lock
        let now = Utc::now().timestamp();
        if let Some(token) = slot.as_ref().filter(|token| token.is_fresh(now)) {
            return Ok(token.value().to_string());
        }

        let token = self.acquire_token(now).await?;
        let value = token.value().to_string();
        *slot = Some(token);
        Ok(value)
    }

    /// Performs the seller-signed login exchange.
    async fn acquire_token(&self, now: i64) -> Result<AuthToken, ApiError> {
        let sign = compute_sign(self.config.api_key().as_ref(), now);
        let login = LoginRequest {
            seller_id: self.config.seller_id().get(),
            timestamp: now,
            sign: &sign,
        };

        tracing::debug!(
            seller_id = self.config.seller_id().get(),
            "acquiring fresh auth token"
        );

        let mut builder = self.http.post(self.endpoint_url("apilogin")).json(&login);
        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }

        let res = builder.send().await?;
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();

        if status != 200 {
            return Err(AuthenticationError { status, body }.into());
        }

        let parsed: TokenResponse = serde_json::from_str(&body)?;
        let lifespan = i64::try_from(self.config.token_lifespan()).unwrap_or(i64::MAX);
        Ok(AuthToken::new(parsed.token, now.saturating_add(lifespan)))
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url(), endpoint)
    }
}
