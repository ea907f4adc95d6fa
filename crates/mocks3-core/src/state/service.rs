//! Top-level engine state.
//!
//! [`MockS3State`] manages the collection of buckets and enforces bucket-name
//! uniqueness. All operations are thread-safe via `DashMap`.

use dashmap::DashMap;
use dashmap::mapref::one::Ref;
use mocks3_model::types::{BucketInfo, Owner};
use tracing::{debug, info};

use crate::error::MockS3Error;

use super::bucket::MockBucket;

/// All buckets known to the mock.
///
/// Bucket names are globally unique; `bucket_owners` tracks which owner
/// holds each name so a duplicate create can be classified as
/// `BucketAlreadyOwnedByYou` (same owner) or `BucketAlreadyExists`
/// (different owner).
pub struct MockS3State {
    /// Bucket name to bucket mapping.
    buckets: DashMap<String, MockBucket>,
    /// Bucket name to owner-ID mapping (enforces global uniqueness).
    bucket_owners: DashMap<String, String>,
}

impl std::fmt::Debug for MockS3State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockS3State")
            .field("bucket_count", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl Default for MockS3State {
    fn default() -> Self {
        Self::new()
    }
}

impl MockS3State {
    /// Create a new, empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
            bucket_owners: DashMap::new(),
        }
    }

    /// Create a new bucket.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::BucketAlreadyOwnedByYou`] if the caller already owns
    ///   a bucket with the same name.
    /// - [`MockS3Error::BucketAlreadyExists`] if the name is taken by a
    ///   different owner.
    pub fn create_bucket(
        &self,
        name: String,
        region: String,
        owner: Owner,
    ) -> Result<BucketInfo, MockS3Error> {
        let owner_id = owner.id.clone();

        if let Some(existing_owner) = self.bucket_owners.get(&name) {
            if *existing_owner == owner_id {
                return Err(MockS3Error::BucketAlreadyOwnedByYou { bucket: name });
            }
            return Err(MockS3Error::BucketAlreadyExists { bucket: name });
        }

        let bucket = MockBucket::new(name.clone(), region, owner);
        let bucket_info = bucket.info();
        self.buckets.insert(name.clone(), bucket);
        self.bucket_owners.insert(name.clone(), owner_id);

        info!(bucket = %name, "bucket created");
        Ok(bucket_info)
    }

    /// Delete a bucket.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    /// - [`MockS3Error::BucketNotEmpty`] if the bucket still contains
    ///   objects.
    pub fn delete_bucket(&self, name: &str) -> Result<(), MockS3Error> {
        let bucket_ref = self
            .buckets
            .get(name)
            .ok_or_else(|| MockS3Error::NoSuchBucket {
                bucket: name.to_owned(),
            })?;

        if !bucket_ref.is_empty() {
            return Err(MockS3Error::BucketNotEmpty {
                bucket: name.to_owned(),
            });
        }

        // Drop the read reference before removing.
        drop(bucket_ref);

        self.buckets.remove(name);
        self.bucket_owners.remove(name);

        info!(bucket = %name, "bucket deleted");
        Ok(())
    }

    /// Get an immutable reference to a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    pub fn get_bucket(&self, name: &str) -> Result<Ref<'_, String, MockBucket>, MockS3Error> {
        self.buckets
            .get(name)
            .ok_or_else(|| MockS3Error::NoSuchBucket {
                bucket: name.to_owned(),
            })
    }

    /// List all buckets, sorted by name.
    #[must_use]
    pub fn list_buckets(&self) -> Vec<BucketInfo> {
        let mut buckets: Vec<BucketInfo> =
            self.buckets.iter().map(|entry| entry.value().info()).collect();
        buckets.sort_by(|a, b| a.name.cmp(&b.name));
        buckets
    }

    /// Check whether a bucket exists.
    #[must_use]
    pub fn bucket_exists(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    /// Reset all state, removing every bucket.
    pub fn reset(&self) {
        debug!("resetting all bucket state");
        self.buckets.clear();
        self.bucket_owners.clear();
    }
}
