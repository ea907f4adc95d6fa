//! Per-bucket state.

use chrono::{DateTime, Utc};
use mocks3_model::types::{BucketInfo, Owner};
use parking_lot::RwLock;

use super::index::ObjectIndex;

/// A bucket with its metadata and object records.
///
/// The object index sits behind a `parking_lot::RwLock` so concurrent
/// readers do not block each other; mutations are serialized per bucket.
pub struct MockBucket {
    /// Bucket name.
    pub name: String,
    /// Region the bucket was created in.
    pub region: String,
    /// When the bucket was created.
    pub creation_date: DateTime<Utc>,
    /// The bucket owner.
    pub owner: Owner,
    /// Object records keyed and sorted by object key.
    pub objects: RwLock<ObjectIndex>,
}

impl std::fmt::Debug for MockBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBucket")
            .field("name", &self.name)
            .field("region", &self.region)
            .field("creation_date", &self.creation_date)
            .field("object_count", &self.objects.read().len())
            .finish_non_exhaustive()
    }
}

impl MockBucket {
    /// Create a new, empty bucket stamped with the current time.
    #[must_use]
    pub fn new(name: String, region: String, owner: Owner) -> Self {
        Self {
            name,
            region,
            creation_date: Utc::now(),
            owner,
            objects: RwLock::new(ObjectIndex::default()),
        }
    }

    /// Whether the bucket contains zero objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// Summary info for this bucket.
    #[must_use]
    pub fn info(&self) -> BucketInfo {
        BucketInfo {
            name: self.name.clone(),
            region: self.region.clone(),
            creation_date: self.creation_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use mocks3_model::types::ObjectMetadata;

    use super::super::object::MockObject;
    use super::*;

    fn make_bucket(name: &str) -> MockBucket {
        MockBucket::new(name.to_owned(), "us-east-1".to_owned(), Owner::default())
    }

    #[test]
    fn test_should_create_empty_bucket() {
        let bucket = make_bucket("test-bucket");
        assert_eq!(bucket.name, "test-bucket");
        assert_eq!(bucket.region, "us-east-1");
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_should_report_not_empty_with_objects() {
        let bucket = make_bucket("full");
        bucket.objects.write().put(MockObject::new(
            "file.txt".to_owned(),
            "\"abc\"".to_owned(),
            42,
            ObjectMetadata::default(),
            Owner::default(),
        ));
        assert!(!bucket.is_empty());
    }

    #[test]
    fn test_should_build_info() {
        let bucket = make_bucket("info-bucket");
        let info = bucket.info();
        assert_eq!(info.name, "info-bucket");
        assert_eq!(info.region, "us-east-1");
        assert_eq!(info.creation_date, bucket.creation_date);
    }

    #[test]
    fn test_should_debug_format_bucket() {
        let bucket = make_bucket("debug-bucket");
        let debug_str = format!("{bucket:?}");
        assert!(debug_str.contains("debug-bucket"));
    }
}
