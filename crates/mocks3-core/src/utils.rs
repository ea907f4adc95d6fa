//! Small shared helpers: request IDs and continuation tokens.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use uuid::Uuid;

use crate::error::MockS3Error;

/// Generate a unique request ID (UUID v4 without dashes).
///
/// # Examples
///
/// ```
/// use mocks3_core::utils::generate_request_id;
///
/// let id = generate_request_id();
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Encode an object key as an opaque v2-listing continuation token.
///
/// # Examples
///
/// ```
/// use mocks3_core::utils::{decode_continuation_token, encode_continuation_token};
///
/// let token = encode_continuation_token("photos/2024/img.jpg");
/// let key = decode_continuation_token(&token).unwrap();
/// assert_eq!(key, "photos/2024/img.jpg");
/// ```
#[must_use]
pub fn encode_continuation_token(key: &str) -> String {
    BASE64_STANDARD.encode(key.as_bytes())
}

/// Decode a continuation token back to an object key.
///
/// # Errors
///
/// Returns [`MockS3Error::InvalidArgument`] if the token is not valid base64
/// or does not decode to valid UTF-8.
pub fn decode_continuation_token(token: &str) -> Result<String, MockS3Error> {
    let bytes = BASE64_STANDARD
        .decode(token)
        .map_err(|_| MockS3Error::InvalidArgument {
            message: "The continuation token provided is incorrect".to_owned(),
        })?;
    String::from_utf8(bytes).map_err(|_| MockS3Error::InvalidArgument {
        message: "The continuation token provided is incorrect".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_generate_unique_request_ids() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_should_roundtrip_continuation_token() {
        let token = encode_continuation_token("a/b/c with spaces");
        let key = decode_continuation_token(&token)
            .unwrap_or_else(|e| panic!("decode failed: {e}"));
        assert_eq!(key, "a/b/c with spaces");
    }

    #[test]
    fn test_should_reject_malformed_token() {
        let result = decode_continuation_token("not-valid-base64!!!");
        assert!(matches!(result, Err(MockS3Error::InvalidArgument { .. })));
    }
}
