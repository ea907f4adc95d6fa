//! Per-object metadata records.

use chrono::{DateTime, Utc};
use mocks3_model::types::{ObjectMetadata, ObjectSummary, Owner, STORAGE_CLASS_STANDARD};

/// Metadata record for one stored object.
///
/// The payload bytes live in the payload store; this record carries
/// everything else a listing or head call reports.
#[derive(Debug, Clone)]
pub struct MockObject {
    /// The object key.
    pub key: String,
    /// The entity tag (quoted hex MD5 of the payload).
    pub etag: String,
    /// The payload size in bytes.
    pub size: u64,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// The storage class (always `STANDARD` in this mock).
    pub storage_class: String,
    /// Metadata recorded at put time.
    pub metadata: ObjectMetadata,
    /// The owner of this object.
    pub owner: Owner,
}

impl MockObject {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(
        key: String,
        etag: String,
        size: u64,
        metadata: ObjectMetadata,
        owner: Owner,
    ) -> Self {
        Self {
            key,
            etag,
            size,
            last_modified: Utc::now(),
            storage_class: STORAGE_CLASS_STANDARD.to_owned(),
            metadata,
            owner,
        }
    }

    /// Build the listing summary for this record.
    #[must_use]
    pub fn summary(&self, with_owner: bool) -> ObjectSummary {
        ObjectSummary {
            key: self.key.clone(),
            etag: self.etag.clone(),
            size: self.size,
            last_modified: self.last_modified,
            storage_class: self.storage_class.clone(),
            owner: with_owner.then(|| self.owner.clone()),
        }
    }
}
