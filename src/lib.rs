//! # Digiseller API Rust SDK
//!
//! A Rust SDK for the Digiseller seller API, providing type-safe
//! configuration, seller-signed authentication and typed wrappers over the
//! dialog, account operation, product catalog and sales statistics
//! endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DigisellerConfig`] and [`DigisellerConfigBuilder`]
//! - Validated newtypes for the session credentials ([`SellerId`], [`ApiKey`])
//! - Lazy, traffic-driven auth token acquisition with a 30-second expiry margin
//! - A central request dispatcher with method-dependent parameter placement
//! - Typed resource records built from the JSON payloads
//!
//! ## Quick Start
//!
//! ```rust
//! use digiseller_api::{ApiKey, DigisellerClient, DigisellerConfig, SellerId};
//!
//! // Create configuration using the builder pattern
//! let config = DigisellerConfig::builder()
//!     .seller_id(SellerId::new(246810).unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = DigisellerClient::new(config);
//! ```
//!
//! ## Making API Requests
//!
//! Every remote operation is exposed through a resource wrapper borrowed
//! from the client:
//!
//! ```rust,ignore
//! // Support dialogs
//! let dialogs = client.dialogs().list(Some(20)).await?;
//! let status = client.dialogs().status(dialogs[0].order_id).await?;
//! let closed = client.dialogs().change_status(dialogs[0].order_id, true).await?;
//!
//! // Account ledger
//! let operations = client.operations().list(&Default::default()).await?;
//!
//! // Catalog
//! let categories = client.products().categories(&Default::default()).await?;
//! let products = client.products().list(&Default::default()).await?;
//!
//! // Sales statistics
//! let latest = client.statistics().latest_sales(true, 100).await?;
//! let sales = client.statistics().sales(&Default::default()).await?;
//! ```
//!
//! ## Authentication
//!
//! The client obtains a bearer token lazily from the `apilogin` endpoint:
//! the login request carries the seller id, the current Unix timestamp and
//! a SHA-256 signature over the API key and the timestamp. The token is
//! reused until it comes within 30 seconds of its nominal expiry (7200
//! seconds by default), at which point the next dispatched request acquires
//! a replacement. There is no background refresh and no retry: a failed
//! login surfaces as [`AuthenticationError`] to the caller.
//!
//! ## Error Handling
//!
//! Construction errors ([`ConfigError`]) are raised when the configuration
//! is built, never at request time. Request-time failures surface as
//! [`ApiError`]: rejected logins, non-2xx responses, network errors,
//! unexpected payload shapes and permanently unsupported operations. The
//! library never retries, logs-and-swallows or returns partial results.
//!
//! ## Design Principles
//!
//! - **No global state**: token state lives inside each client instance
//! - **Fail-fast validation**: credentials are validated on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Thin gateway**: no retries, no caching, no rate limiting

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::{
    ApiError, ApiResponse, AuthenticationError, DigisellerClient, HttpMethod, Params,
    TransportError, UnsupportedOperationError,
};
pub use config::{
    ApiKey, DigisellerConfig, DigisellerConfigBuilder, SellerId, DEFAULT_BASE_URL,
    DEFAULT_TOKEN_LIFESPAN,
};
pub use error::ConfigError;

// Re-export resource types for convenience
pub use resources::{
    AgentSalesListParams, AllowType, Category, CategoryListParams, CodeFilter, Currency, Dialog,
    DialogState, DialogStatus, Dialogs, Message, Operation, OperationListParams, OperationType,
    Operations, Product, ProductListParams, Products, ReturnFilter, Sale, SalesListParams,
    SalesSummary, Statistics,
};
