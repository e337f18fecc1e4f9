//! Auth token state and the client-owned token cache.
//!
//! A token is an opaque string paired with an absolute expiry timestamp.
//! The client replaces it wholesale on every refresh; a token is never
//! partially updated. Refresh is driven by request traffic: a token is
//! considered stale once the current time is within the safety margin of
//! its nominal expiry, and the next dispatched request acquires a new one.

use std::fmt;

use serde::Deserialize;
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Safety margin in seconds subtracted from the nominal token expiry.
///
/// A token is refreshed once `now >= expires_at - EXPIRY_MARGIN`, so a
/// request is never sent with a token this close to expiring.
pub const EXPIRY_MARGIN: i64 = 30;

/// A bearer token together with its absolute expiry time.
///
/// The expiry is `acquired_at + token_lifespan` in Unix seconds; the server
/// does not echo a lifespan, so the client computes it from the configured
/// value.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    value: String,
    expires_at: i64,
}

impl AuthToken {
    /// Creates a token with the given value and absolute expiry.
    #[must_use]
    pub const fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// Returns the opaque token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the absolute expiry in Unix seconds.
    #[must_use]
    pub const fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Returns `true` if the token is still usable at `now`, i.e. outside
    /// the safety margin of its expiry.
    #[must_use]
    pub const fn is_fresh(&self, now: i64) -> bool {
        now < self.expires_at - EXPIRY_MARGIN
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mask the token value like other credentials
        f.debug_struct("AuthToken")
            .field("value", &"*****")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Wire shape of a successful `apilogin` response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) token: String,
}

/// The single token slot owned by a client instance.
///
/// The slot is an `RwLock` so that the common case (a fresh token) takes a
/// read lock, while a refresh takes the write lock and re-checks before
/// acquiring. Each client owns its own cache, so independent client
/// instances never share token state.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    inner: RwLock<Option<AuthToken>>,
}

impl TokenCache {
    /// Returns the cached token value if it is still fresh at `now`.
    pub(crate) async fn fresh(&self, now: i64) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_fresh(now))
            .map(|token| token.value().to_string())
    }

    /// Acquires the write guard over the token slot.
    pub(crate) async fn lock(&self) -> RwLockWriteGuard<'_, Option<AuthToken>> {
        self.inner.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_fresh_outside_margin() {
        let token = AuthToken::new("tok".to_string(), 1_000);
        assert!(token.is_fresh(969));
    }

    #[test]
    fn test_token_stale_at_margin_boundary() {
        let token = AuthToken::new("tok".to_string(), 1_000);
        // now == expires_at - 30 is already stale
        assert!(!token.is_fresh(970));
        assert!(!token.is_fresh(1_000));
        assert!(!token.is_fresh(2_000));
    }

    #[test]
    fn test_debug_masks_token_value() {
        let token = AuthToken::new("super-secret-token".to_string(), 1_000);
        let debug_output = format!("{:?}", token);
        assert!(debug_output.contains("*****"));
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[tokio::test]
    async fn test_cache_starts_empty() {
        let cache = TokenCache::default();
        assert!(cache.fresh(0).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_returns_fresh_token_only() {
        let cache = TokenCache::default();
        *cache.lock().await = Some(AuthToken::new("tok".to_string(), 1_000));

        assert_eq!(cache.fresh(900).await.as_deref(), Some("tok"));
        assert!(cache.fresh(980).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_replaces_token_wholesale() {
        let cache = TokenCache::default();
        *cache.lock().await = Some(AuthToken::new("old".to_string(), 1_000));
        *cache.lock().await = Some(AuthToken::new("new".to_string(), 5_000));

        assert_eq!(cache.fresh(900).await.as_deref(), Some("new"));
    }

    #[test]
    fn test_token_response_deserializes() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"token":"abc-123","valid_thru":"ignored"}"#).unwrap();
        assert_eq!(parsed.token, "abc-123");
    }
}
