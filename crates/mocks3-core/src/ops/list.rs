//! Listing operation handlers.
//!
//! Implements `list_objects` (v1, marker-based) and `list_objects_v2`
//! (continuation-token-based).

use mocks3_model::input::{ListObjectsRequest, ListObjectsV2Request};
use mocks3_model::output::{ListObjectsV2Result, ObjectListing};
use tracing::debug;

use crate::backend::MockS3Backend;
use crate::error::MockS3Result;
use crate::utils::{decode_continuation_token, encode_continuation_token};

/// Default maximum number of keys returned in a single listing response.
const DEFAULT_MAX_KEYS: i32 = 1000;

/// Resolve the effective max-keys limit from a request value.
fn effective_max_keys(requested: Option<i32>) -> (i32, usize) {
    let max_keys = requested.unwrap_or(DEFAULT_MAX_KEYS);
    let as_usize = usize::try_from(max_keys).unwrap_or(1000);
    (max_keys, as_usize)
}

impl MockS3Backend {
    /// List objects (v1 API).
    ///
    /// Results are in lexicographic key order, stable across repeated calls.
    ///
    /// # Errors
    ///
    /// Returns [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    ///
    /// [`MockS3Error::NoSuchBucket`]: crate::error::MockS3Error::NoSuchBucket
    pub fn list_objects(
        &self,
        bucket: &str,
        request: ListObjectsRequest,
    ) -> MockS3Result<ObjectListing> {
        let bucket_ref = self.state.get_bucket(bucket)?;

        let prefix = request.prefix.as_deref().unwrap_or("");
        let delimiter = request.delimiter.as_deref().unwrap_or("");
        let marker = request.marker.as_deref().unwrap_or("");
        let (max_keys, max_keys_usize) = effective_max_keys(request.max_keys);

        let outcome = bucket_ref
            .objects
            .read()
            .list(prefix, delimiter, marker, max_keys_usize);
        drop(bucket_ref);

        let contents = outcome.records.iter().map(|o| o.summary(true)).collect();

        debug!(
            bucket = %bucket,
            prefix = %prefix,
            count = outcome.records.len(),
            is_truncated = outcome.is_truncated,
            "list_objects completed"
        );

        Ok(ObjectListing {
            bucket: bucket.to_owned(),
            prefix: request.prefix,
            delimiter: request.delimiter,
            contents,
            common_prefixes: outcome.common_prefixes,
            is_truncated: outcome.is_truncated,
            next_marker: outcome.next_marker,
            max_keys,
        })
    }

    /// List objects (v2 API with continuation tokens).
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    /// - [`MockS3Error::InvalidArgument`] if the continuation token is
    ///   malformed.
    ///
    /// [`MockS3Error::NoSuchBucket`]: crate::error::MockS3Error::NoSuchBucket
    /// [`MockS3Error::InvalidArgument`]: crate::error::MockS3Error::InvalidArgument
    pub fn list_objects_v2(
        &self,
        bucket: &str,
        request: ListObjectsV2Request,
    ) -> MockS3Result<ListObjectsV2Result> {
        let bucket_ref = self.state.get_bucket(bucket)?;

        let prefix = request.prefix.as_deref().unwrap_or("");
        let delimiter = request.delimiter.as_deref().unwrap_or("");
        let (max_keys, max_keys_usize) = effective_max_keys(request.max_keys);

        // The continuation token takes precedence over start_after.
        let decoded_token = match request.continuation_token.as_deref() {
            Some(token) => Some(decode_continuation_token(token)?),
            None => None,
        };
        let start_after = decoded_token
            .as_deref()
            .or(request.start_after.as_deref())
            .unwrap_or("");

        let outcome = bucket_ref
            .objects
            .read()
            .list(prefix, delimiter, start_after, max_keys_usize);
        drop(bucket_ref);

        let contents: Vec<_> = outcome
            .records
            .iter()
            .map(|o| o.summary(request.fetch_owner))
            .collect();

        let next_continuation_token = if outcome.is_truncated {
            outcome
                .next_marker
                .as_deref()
                .map(encode_continuation_token)
        } else {
            None
        };

        let key_count = i32::try_from(contents.len()).unwrap_or(i32::MAX);

        debug!(
            bucket = %bucket,
            prefix = %prefix,
            count = key_count,
            is_truncated = outcome.is_truncated,
            "list_objects_v2 completed"
        );

        Ok(ListObjectsV2Result {
            bucket: bucket.to_owned(),
            prefix: request.prefix,
            delimiter: request.delimiter,
            contents,
            common_prefixes: outcome.common_prefixes,
            is_truncated: outcome.is_truncated,
            key_count,
            next_continuation_token,
            start_after: request.start_after,
            max_keys,
        })
    }
}
