//! The in-memory [`ObjectStore`] implementation.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use mocks3_core::{MockS3Backend, MockS3Config};
use mocks3_model::input::{ListObjectsRequest, ListObjectsV2Request, PutObjectOptions};
use mocks3_model::output::{
    DeletedObject, GetObjectResult, HeadObjectResult, ListObjectsV2Result, ObjectListing,
    PutObjectResult,
};
use mocks3_model::types::BucketInfo;
use mocks3_model::S3Error;

use crate::client::ObjectStore;

/// In-memory S3 client backed by [`MockS3Backend`].
///
/// Cloning is cheap and clones share state, so a test can keep one handle
/// for seeding and hand another to the code under test.
///
/// # Examples
///
/// ```
/// use mocks3_client::{MockS3Client, ObjectStore};
///
/// # tokio_test::block_on(async {
/// let client = MockS3Client::default();
/// client.create_bucket("my-bucket").await.unwrap();
/// client
///     .put_object_text("my-bucket", "greeting.txt", "hello")
///     .await
///     .unwrap();
///
/// let content = client
///     .get_object_as_string("my-bucket", "greeting.txt")
///     .await
///     .unwrap();
/// assert_eq!(content, "hello");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockS3Client {
    backend: Arc<MockS3Backend>,
}

impl MockS3Client {
    /// Create a client over a fresh backend with the given configuration.
    #[must_use]
    pub fn new(config: MockS3Config) -> Self {
        Self {
            backend: Arc::new(MockS3Backend::new(config)),
        }
    }

    /// Create a client over an existing backend.
    ///
    /// Useful when a test owns the backend for direct seeding and hands the
    /// client to the code under test.
    #[must_use]
    pub fn from_backend(backend: Arc<MockS3Backend>) -> Self {
        Self { backend }
    }

    /// The backend this client operates on.
    #[must_use]
    pub fn backend(&self) -> &MockS3Backend {
        &self.backend
    }

    /// Reset all state (explicit teardown between test cases).
    pub fn reset(&self) {
        self.backend.reset();
    }
}

impl Default for MockS3Client {
    fn default() -> Self {
        Self::new(MockS3Config::default())
    }
}

#[async_trait]
impl ObjectStore for MockS3Client {
    async fn create_bucket(&self, bucket: &str) -> Result<BucketInfo, S3Error> {
        self.backend.create_bucket(bucket).map_err(Into::into)
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<(), S3Error> {
        self.backend.delete_bucket(bucket).map_err(Into::into)
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool, S3Error> {
        Ok(self.backend.bucket_exists(bucket))
    }

    async fn list_buckets(&self) -> Result<Vec<BucketInfo>, S3Error> {
        Ok(self.backend.list_buckets())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        options: PutObjectOptions,
    ) -> Result<PutObjectResult, S3Error> {
        self.backend
            .put_object(bucket, key, body, options)
            .await
            .map_err(Into::into)
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetObjectResult, S3Error> {
        self.backend
            .get_object(bucket, key)
            .await
            .map_err(Into::into)
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<HeadObjectResult, S3Error> {
        self.backend.head_object(bucket, key).map_err(Into::into)
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, S3Error> {
        Ok(self.backend.object_exists(bucket, key))
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), S3Error> {
        self.backend
            .delete_object(bucket, key)
            .map(|_removed| ())
            .map_err(Into::into)
    }

    async fn delete_objects(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<DeletedObject>, S3Error> {
        self.backend
            .delete_objects(bucket, keys)
            .map_err(Into::into)
    }

    async fn copy_object(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> Result<PutObjectResult, S3Error> {
        self.backend
            .copy_object(src_bucket, src_key, dst_bucket, dst_key)
            .await
            .map_err(Into::into)
    }

    async fn list_objects(
        &self,
        bucket: &str,
        request: ListObjectsRequest,
    ) -> Result<ObjectListing, S3Error> {
        self.backend
            .list_objects(bucket, request)
            .map_err(Into::into)
    }

    async fn list_objects_v2(
        &self,
        bucket: &str,
        request: ListObjectsV2Request,
    ) -> Result<ListObjectsV2Result, S3Error> {
        self.backend
            .list_objects_v2(bucket, request)
            .map_err(Into::into)
    }

    async fn presigned_url(&self, bucket: &str, key: &str) -> Result<String, S3Error> {
        Ok(self.backend.presigned_url(bucket, key))
    }
}
