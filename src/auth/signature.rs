//! Time-based request signature for the login endpoint.
//!
//! The `apilogin` request is signed with a SHA-256 digest of the API key
//! concatenated with the decimal string of the current Unix timestamp. The
//! digest is transmitted as lowercase hex in the `sign` field of the login
//! body.
//!
//! # Example
//!
//! ```rust
//! use digiseller_api::auth::signature::compute_sign;
//!
//! let sign = compute_sign("my-api-key", 1_700_000_000);
//! assert_eq!(sign.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
//! assert!(sign.chars().all(|c| c.is_ascii_hexdigit()));
//! ```

use sha2::{Digest, Sha256};

/// Computes the login signature for the given API key and timestamp.
///
/// The signature is the lowercase hex SHA-256 digest of the key bytes
/// followed by the decimal representation of the timestamp, matching the
/// scheme documented for the Digiseller authentication endpoint.
///
/// # Arguments
///
/// * `api_key` - The seller's API key, used verbatim
/// * `timestamp` - The current Unix timestamp in seconds
///
/// # Returns
///
/// A lowercase hex-encoded SHA-256 digest.
#[must_use]
pub fn compute_sign(api_key: &str, timestamp: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_sign_reproduces_known_digest() {
        // SHA-256("abc1700000000")
        let sign = compute_sign("abc", 1_700_000_000);
        assert_eq!(
            sign,
            "139d720ab3fe33252a099243519e7548ce791f035b647c70bc13e8a12f503cda"
        );
    }

    #[test]
    fn test_compute_sign_is_deterministic() {
        let first = compute_sign("my-key", 1_650_000_000);
        let second = compute_sign("my-key", 1_650_000_000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_sign_produces_lowercase_hex() {
        let sign = compute_sign("key", 42);
        assert_eq!(sign.len(), 64);
        assert!(sign
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_compute_sign_varies_with_timestamp() {
        let first = compute_sign("key", 1_700_000_000);
        let second = compute_sign("key", 1_700_000_001);
        assert_ne!(first, second);
    }

    #[test]
    fn test_compute_sign_varies_with_key() {
        let first = compute_sign("key-a", 1_700_000_000);
        let second = compute_sign("key-b", 1_700_000_000);
        assert_ne!(first, second);
    }

    #[test]
    fn test_hex_encode() {
        assert_eq!(super::hex::encode([0x00, 0xff, 0x2a]), "00ff2a");
        assert_eq!(super::hex::encode([]), "");
    }
}
