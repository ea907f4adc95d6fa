//! Request validation.
//!
//! Bucket-name rules follow the
//! [Amazon S3 documentation](https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html);
//! object keys are limited to the documented 1024-byte maximum.

use std::net::Ipv4Addr;

use crate::error::MockS3Error;

/// Minimum bucket name length.
const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum bucket name length.
const MAX_BUCKET_NAME_LEN: usize = 63;

/// Maximum object key length in bytes.
const MAX_KEY_BYTES: usize = 1024;

/// Validate an S3 bucket name.
///
/// Rules (per AWS documentation):
/// - 3-63 characters long
/// - Only lowercase letters, numbers, hyphens, and dots
/// - Must start and end with a letter or number
/// - No consecutive dots (`..`)
/// - Not formatted as an IPv4 address (e.g. `192.168.0.1`)
/// - Must not start with `xn--` or `sthree-`
/// - Must not end with `-s3alias`
///
/// # Errors
///
/// Returns [`MockS3Error::InvalidBucketName`] if any rule is violated.
///
/// # Examples
///
/// ```
/// use mocks3_core::validation::validate_bucket_name;
///
/// assert!(validate_bucket_name("my-valid-bucket").is_ok());
/// assert!(validate_bucket_name("AB").is_err());
/// ```
pub fn validate_bucket_name(name: &str) -> Result<(), MockS3Error> {
    let len = name.len();

    if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len) {
        return Err(invalid_name(
            name,
            format!(
                "Bucket name must be between {MIN_BUCKET_NAME_LEN} and {MAX_BUCKET_NAME_LEN} characters long"
            ),
        ));
    }

    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
    {
        return Err(invalid_name(
            name,
            "Bucket name must only contain lowercase letters, numbers, hyphens, and dots",
        ));
    }

    let first = name.as_bytes()[0];
    let last = name.as_bytes()[len - 1];
    if !(first.is_ascii_lowercase() || first.is_ascii_digit())
        || !(last.is_ascii_lowercase() || last.is_ascii_digit())
    {
        return Err(invalid_name(
            name,
            "Bucket name must start and end with a letter or number",
        ));
    }

    if name.contains("..") {
        return Err(invalid_name(
            name,
            "Bucket name must not contain consecutive dots",
        ));
    }

    if name.parse::<Ipv4Addr>().is_ok() {
        return Err(invalid_name(
            name,
            "Bucket name must not be formatted as an IP address",
        ));
    }

    if name.starts_with("xn--") {
        return Err(invalid_name(name, "Bucket name must not start with 'xn--'"));
    }

    if name.starts_with("sthree-") {
        return Err(invalid_name(
            name,
            "Bucket name must not start with 'sthree-'",
        ));
    }

    if name.ends_with("-s3alias") {
        return Err(invalid_name(
            name,
            "Bucket name must not end with '-s3alias'",
        ));
    }

    Ok(())
}

/// Validate an object key.
///
/// # Errors
///
/// - [`MockS3Error::InvalidArgument`] if the key is empty.
/// - [`MockS3Error::KeyTooLong`] if the key exceeds 1024 bytes.
pub fn validate_object_key(key: &str) -> Result<(), MockS3Error> {
    if key.is_empty() {
        return Err(MockS3Error::InvalidArgument {
            message: "Object key must not be empty".to_owned(),
        });
    }
    if key.len() > MAX_KEY_BYTES {
        return Err(MockS3Error::KeyTooLong);
    }
    Ok(())
}

fn invalid_name(name: &str, reason: impl Into<String>) -> MockS3Error {
    MockS3Error::InvalidBucketName {
        name: name.to_owned(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_accept_valid_bucket_names() {
        for name in [
            "abc",
            "my-bucket",
            "my.bucket.dots",
            "bucket123",
            "0-starts-with-digit",
        ] {
            assert!(
                validate_bucket_name(name).is_ok(),
                "expected valid name: {name}"
            );
        }
    }

    #[test]
    fn test_should_reject_bad_lengths() {
        assert!(validate_bucket_name("ab").is_err());
        let too_long = "a".repeat(64);
        assert!(validate_bucket_name(&too_long).is_err());
    }

    #[test]
    fn test_should_reject_invalid_characters() {
        for name in ["MyBucket", "my_bucket", "bucket name", "bücket"] {
            assert!(
                validate_bucket_name(name).is_err(),
                "expected invalid name: {name}"
            );
        }
    }

    #[test]
    fn test_should_reject_bad_edge_characters() {
        assert!(validate_bucket_name("-leading-dash").is_err());
        assert!(validate_bucket_name("trailing-dash-").is_err());
        assert!(validate_bucket_name(".leading-dot").is_err());
    }

    #[test]
    fn test_should_reject_consecutive_dots() {
        assert!(validate_bucket_name("my..bucket").is_err());
    }

    #[test]
    fn test_should_reject_ip_address_names() {
        assert!(validate_bucket_name("192.168.0.1").is_err());
    }

    #[test]
    fn test_should_reject_reserved_prefixes_and_suffixes() {
        assert!(validate_bucket_name("xn--bucket").is_err());
        assert!(validate_bucket_name("sthree-bucket").is_err());
        assert!(validate_bucket_name("bucket-s3alias").is_err());
    }

    #[test]
    fn test_should_accept_reasonable_keys() {
        assert!(validate_object_key("file.txt").is_ok());
        assert!(validate_object_key("photos/2024/march/img 1.jpg").is_ok());
    }

    #[test]
    fn test_should_reject_empty_key() {
        assert!(matches!(
            validate_object_key(""),
            Err(MockS3Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_should_reject_overlong_key() {
        let key = "k".repeat(1025);
        assert!(matches!(
            validate_object_key(&key),
            Err(MockS3Error::KeyTooLong)
        ));
    }

    #[test]
    fn test_should_accept_key_at_limit() {
        let key = "k".repeat(1024);
        assert!(validate_object_key(&key).is_ok());
    }
}
