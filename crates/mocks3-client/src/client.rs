//! The `ObjectStore` capability trait.
//!
//! # Object safety
//!
//! The trait uses `#[async_trait]` so it is object-safe for dynamic
//! dispatch: consumers hold an `Arc<dyn ObjectStore>` and the concrete
//! implementation — in-memory mock or remote client — is chosen at
//! construction time. Implementations over a network transport would carry
//! the same signatures, which is why sync-looking calls like
//! `bucket_exists` still return `Result`.

use async_trait::async_trait;
use bytes::Bytes;
use mocks3_model::input::{ListObjectsRequest, ListObjectsV2Request, PutObjectOptions};
use mocks3_model::output::{
    DeletedObject, GetObjectResult, HeadObjectResult, ListObjectsV2Result, ObjectListing,
    PutObjectResult,
};
use mocks3_model::types::BucketInfo;
use mocks3_model::S3Error;

/// An S3-compatible object store.
///
/// The contract covers the bucket and object operations a consuming
/// application exercises against the service: explicit bucket lifecycle,
/// object CRUD, bulk delete, copy, listings, and fake presigned URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create a new, empty bucket.
    async fn create_bucket(&self, bucket: &str) -> Result<BucketInfo, S3Error>;

    /// Delete an empty bucket.
    async fn delete_bucket(&self, bucket: &str) -> Result<(), S3Error>;

    /// Check whether a bucket exists.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, S3Error>;

    /// List all buckets, sorted by name.
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>, S3Error>;

    /// Insert or overwrite the object at `key` in `bucket`.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        options: PutObjectOptions,
    ) -> Result<PutObjectResult, S3Error>;

    /// Store a text payload, recording a `text/plain` content type.
    async fn put_object_text(
        &self,
        bucket: &str,
        key: &str,
        content: &str,
    ) -> Result<PutObjectResult, S3Error> {
        let options = PutObjectOptions::builder()
            .content_type(mime::TEXT_PLAIN.to_string())
            .build();
        self.put_object(bucket, key, Bytes::from(content.to_owned()), options)
            .await
    }

    /// Fetch an object's payload and metadata.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetObjectResult, S3Error>;

    /// Fetch an object's payload decoded as text.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than
    /// rejected.
    async fn get_object_as_string(&self, bucket: &str, key: &str) -> Result<String, S3Error> {
        let result = self.get_object(bucket, key).await?;
        Ok(String::from_utf8_lossy(&result.body).into_owned())
    }

    /// Fetch an object's metadata without the payload.
    async fn head_object(&self, bucket: &str, key: &str) -> Result<HeadObjectResult, S3Error>;

    /// Check whether an object exists. An absent bucket reports `false`.
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, S3Error>;

    /// Delete an object. Succeeds silently when the key is absent.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), S3Error>;

    /// Delete multiple objects; returns the keys that were actually removed.
    async fn delete_objects(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<DeletedObject>, S3Error>;

    /// Copy an object, payload and metadata.
    async fn copy_object(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> Result<PutObjectResult, S3Error>;

    /// List objects (v1, marker-based pagination).
    async fn list_objects(
        &self,
        bucket: &str,
        request: ListObjectsRequest,
    ) -> Result<ObjectListing, S3Error>;

    /// List objects (v2, continuation-token pagination).
    async fn list_objects_v2(
        &self,
        bucket: &str,
        request: ListObjectsV2Request,
    ) -> Result<ListObjectsV2Result, S3Error>;

    /// Generate a presigned URL for an object.
    async fn presigned_url(&self, bucket: &str, key: &str) -> Result<String, S3Error>;
}
