//! Operation output types.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ObjectMetadata, ObjectSummary};

/// Result of a put-object call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutObjectResult {
    /// The ETag computed for the stored payload.
    pub etag: String,
    /// The stored payload size in bytes.
    pub size: u64,
}

/// Result of a get-object call: payload plus the metadata recorded at put
/// time.
#[derive(Debug, Clone)]
pub struct GetObjectResult {
    /// The object payload.
    pub body: Bytes,
    /// The ETag of the payload.
    pub etag: String,
    /// The payload size in bytes.
    pub size: u64,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// The metadata recorded with the object.
    pub metadata: ObjectMetadata,
}

/// Result of a head-object call (metadata without the payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadObjectResult {
    /// The ETag of the payload.
    pub etag: String,
    /// The payload size in bytes.
    pub size: u64,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// The storage class of the object.
    pub storage_class: String,
    /// The metadata recorded with the object.
    pub metadata: ObjectMetadata,
}

/// Result of a v1 object listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectListing {
    /// The bucket that was listed.
    pub bucket: String,
    /// The prefix filter applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// The delimiter applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// The object summaries, in lexicographic key order.
    pub contents: Vec<ObjectSummary>,
    /// Key prefixes grouped by the delimiter.
    pub common_prefixes: Vec<String>,
    /// Whether more keys remain beyond `max_keys`.
    pub is_truncated: bool,
    /// Marker to pass to the next listing call when truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// The effective max-keys limit applied.
    pub max_keys: i32,
}

/// Result of a v2 object listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObjectsV2Result {
    /// The bucket that was listed.
    pub bucket: String,
    /// The prefix filter applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// The delimiter applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// The object summaries, in lexicographic key order.
    pub contents: Vec<ObjectSummary>,
    /// Key prefixes grouped by the delimiter.
    pub common_prefixes: Vec<String>,
    /// Whether more keys remain beyond `max_keys`.
    pub is_truncated: bool,
    /// The number of keys returned in `contents`.
    pub key_count: i32,
    /// Token to pass to the next listing call when truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_continuation_token: Option<String>,
    /// The `start_after` value the caller supplied, echoed back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after: Option<String>,
    /// The effective max-keys limit applied.
    pub max_keys: i32,
}

/// A key removed by a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedObject {
    /// The key that was removed.
    pub key: String,
}
