//! Authentication building blocks.
//!
//! Digiseller authenticates sellers with a short-lived bearer token obtained
//! from the `apilogin` endpoint. The login request itself is unauthenticated
//! but seller-signed: it carries the seller id, the current timestamp and a
//! SHA-256 signature over the API key and the timestamp.
//!
//! This module contains the two halves of that scheme:
//!
//! - [`signature`]: the time-based request signature
//! - [`token`]: the token value, its expiry bookkeeping and the cache slot
//!   owned by the client

pub mod signature;
pub mod token;

pub use token::AuthToken;
