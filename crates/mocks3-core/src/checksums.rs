//! ETag computation for stored payloads.
//!
//! The mock computes a plain MD5 ETag for every object, matching what the
//! real service returns for non-multipart uploads.

use md5::{Digest, Md5};

/// Compute the hex-encoded MD5 digest of `data`.
///
/// This is the raw hex digest; for the quoted form used as an S3 ETag, use
/// [`compute_etag`].
///
/// # Examples
///
/// ```
/// use mocks3_core::checksums::compute_md5;
///
/// assert_eq!(compute_md5(b"hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
#[must_use]
pub fn compute_md5(data: &[u8]) -> String {
    let hash = Md5::digest(data);
    hex::encode(hash)
}

/// Compute the quoted hex-encoded MD5 digest of `data`, suitable for use as
/// an S3 ETag.
///
/// # Examples
///
/// ```
/// use mocks3_core::checksums::compute_etag;
///
/// assert_eq!(compute_etag(b""), "\"d41d8cd98f00b204e9800998ecf8427e\"");
/// ```
#[must_use]
pub fn compute_etag(data: &[u8]) -> String {
    format!("\"{}\"", compute_md5(data))
}
