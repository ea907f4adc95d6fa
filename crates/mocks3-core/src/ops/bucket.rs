//! Bucket operation handlers.
//!
//! Implements create, delete, existence check, and listing for buckets.

use mocks3_model::types::BucketInfo;
use tracing::debug;

use crate::backend::MockS3Backend;
use crate::error::MockS3Result;
use crate::validation::validate_bucket_name;

impl MockS3Backend {
    /// Create a new, empty bucket.
    ///
    /// Buckets are always created explicitly; no operation creates one as a
    /// side effect.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::InvalidBucketName`] if the name violates the naming
    ///   rules.
    /// - [`MockS3Error::BucketAlreadyOwnedByYou`] if this backend already
    ///   created a bucket with the name.
    /// - [`MockS3Error::BucketAlreadyExists`] if another owner holds the
    ///   name.
    ///
    /// [`MockS3Error::InvalidBucketName`]: crate::error::MockS3Error::InvalidBucketName
    /// [`MockS3Error::BucketAlreadyOwnedByYou`]: crate::error::MockS3Error::BucketAlreadyOwnedByYou
    /// [`MockS3Error::BucketAlreadyExists`]: crate::error::MockS3Error::BucketAlreadyExists
    pub fn create_bucket(&self, name: &str) -> MockS3Result<BucketInfo> {
        validate_bucket_name(name)?;
        self.state.create_bucket(
            name.to_owned(),
            self.config.default_region.clone(),
            self.owner.clone(),
        )
    }

    /// Delete an empty bucket.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    /// - [`MockS3Error::BucketNotEmpty`] if the bucket still contains
    ///   objects.
    ///
    /// [`MockS3Error::NoSuchBucket`]: crate::error::MockS3Error::NoSuchBucket
    /// [`MockS3Error::BucketNotEmpty`]: crate::error::MockS3Error::BucketNotEmpty
    pub fn delete_bucket(&self, name: &str) -> MockS3Result<()> {
        self.state.delete_bucket(name)?;
        self.storage.delete_bucket_payloads(name);
        debug!(bucket = %name, "delete_bucket completed");
        Ok(())
    }

    /// Check whether a bucket exists. Never fails.
    #[must_use]
    pub fn bucket_exists(&self, name: &str) -> bool {
        self.state.bucket_exists(name)
    }

    /// List all buckets, sorted by name.
    #[must_use]
    pub fn list_buckets(&self) -> Vec<BucketInfo> {
        self.state.list_buckets()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use mocks3_model::PutObjectOptions;

    use crate::error::MockS3Error;

    use super::*;

    #[test]
    fn test_should_create_bucket_in_default_region() {
        let backend = MockS3Backend::default();
        let info = backend
            .create_bucket("my-bucket")
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        assert_eq!(info.name, "my-bucket");
        assert_eq!(info.region, "us-east-1");
        assert!(backend.bucket_exists("my-bucket"));
    }

    #[test]
    fn test_should_reject_invalid_bucket_name() {
        let backend = MockS3Backend::default();
        let result = backend.create_bucket("Invalid_Name");
        assert!(matches!(
            result,
            Err(MockS3Error::InvalidBucketName { .. })
        ));
        assert!(!backend.bucket_exists("Invalid_Name"));
    }

    #[test]
    fn test_should_reject_duplicate_create() {
        let backend = MockS3Backend::default();
        backend
            .create_bucket("dup")
            .unwrap_or_else(|e| panic!("create failed: {e}"));

        let result = backend.create_bucket("dup");
        assert!(matches!(
            result,
            Err(MockS3Error::BucketAlreadyOwnedByYou { .. })
        ));
    }

    #[test]
    fn test_should_delete_empty_bucket() {
        let backend = MockS3Backend::default();
        backend
            .create_bucket("deleteme")
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        backend
            .delete_bucket("deleteme")
            .unwrap_or_else(|e| panic!("delete failed: {e}"));
        assert!(!backend.bucket_exists("deleteme"));
    }

    #[test]
    fn test_should_reject_delete_of_missing_bucket() {
        let backend = MockS3Backend::default();
        let result = backend.delete_bucket("ghost");
        assert!(matches!(result, Err(MockS3Error::NoSuchBucket { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_delete_of_non_empty_bucket() {
        let backend = MockS3Backend::default();
        backend
            .create_bucket("full")
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        backend
            .put_object(
                "full",
                "file.txt",
                Bytes::from("content"),
                PutObjectOptions::default(),
            )
            .await
            .unwrap_or_else(|e| panic!("put failed: {e}"));

        let result = backend.delete_bucket("full");
        assert!(matches!(result, Err(MockS3Error::BucketNotEmpty { .. })));
        assert!(backend.bucket_exists("full"));
    }

    #[test]
    fn test_should_list_buckets_sorted_by_name() {
        let backend = MockS3Backend::default();
        for name in ["zulu", "alpha", "mike"] {
            backend
                .create_bucket(name)
                .unwrap_or_else(|e| panic!("create {name} failed: {e}"));
        }

        let names: Vec<String> = backend.list_buckets().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["alpha", "mike", "zulu"]);
    }
}
