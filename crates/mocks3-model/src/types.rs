//! Bucket and object metadata types.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The storage class reported for every object stored by the mock.
pub const STORAGE_CLASS_STANDARD: &str = "STANDARD";

/// The owner of a bucket or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// The canonical user ID of the owner.
    pub id: String,
    /// The display name of the owner.
    pub display_name: String,
}

impl Default for Owner {
    fn default() -> Self {
        Self {
            id: "75aa57f09aa0c8caeab4f8c24e99d10f8e7faeebf76c078efc7c6caea54ba06a".to_owned(),
            display_name: "webfile".to_owned(),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.display_name, self.id)
    }
}

/// Summary information about a bucket, as returned by create/list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketInfo {
    /// The bucket name.
    pub name: String,
    /// The region the bucket was created in.
    pub region: String,
    /// When the bucket was created.
    pub creation_date: DateTime<Utc>,
}

/// Metadata stored alongside an object's payload.
///
/// Covers the headers the mock tracks; everything else the real service
/// accepts (encryption, tagging, object lock) is out of scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    /// The MIME type of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content encoding (e.g. `gzip`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    /// Content disposition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_disposition: Option<String>,
    /// Cache control directives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<String>,
    /// User-defined metadata headers (`x-amz-meta-*`).
    #[serde(default)]
    pub user_metadata: HashMap<String, String>,
}

/// Metadata record for one object in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    /// The object key.
    pub key: String,
    /// The entity tag (quoted hex MD5 of the payload).
    pub etag: String,
    /// The payload size in bytes.
    pub size: u64,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// The storage class (always [`STORAGE_CLASS_STANDARD`] in this mock).
    pub storage_class: String,
    /// The object owner, when the caller asked for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}
