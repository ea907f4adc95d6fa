//! Object operation handlers.
//!
//! Implements put, get, head, delete, bulk delete, copy, existence check,
//! and fake presigned-URL generation.

use bytes::Bytes;
use mocks3_model::input::PutObjectOptions;
use mocks3_model::output::{DeletedObject, GetObjectResult, HeadObjectResult, PutObjectResult};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::debug;

use crate::backend::MockS3Backend;
use crate::error::{MockS3Error, MockS3Result};
use crate::state::MockObject;
use crate::validation::validate_object_key;

/// Characters percent-encoded in presigned-URL key paths. `/` is left alone
/// so keys keep their path shape.
const KEY_PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%');

impl MockS3Backend {
    /// Put (upload) an object, overwriting any existing object at the key.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::InvalidArgument`] / [`MockS3Error::KeyTooLong`] if
    ///   the key is invalid.
    /// - [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    /// - [`MockS3Error::Internal`] if payload spillover fails.
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        options: PutObjectOptions,
    ) -> MockS3Result<PutObjectResult> {
        validate_object_key(key)?;

        // Verify the bucket exists before touching storage.
        self.state.get_bucket(bucket)?;

        let metadata = options.into_metadata();
        let write = self.storage.write(bucket, key, data).await?;

        let record = MockObject::new(
            key.to_owned(),
            write.etag.clone(),
            write.size,
            metadata,
            self.owner.clone(),
        );

        {
            let bucket_ref = self.state.get_bucket(bucket)?;
            bucket_ref.objects.write().put(record);
        }

        debug!(bucket = %bucket, key = %key, size = write.size, "put_object completed");

        Ok(PutObjectResult {
            etag: write.etag,
            size: write.size,
        })
    }

    /// Get (download) an object: payload plus recorded metadata.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    /// - [`MockS3Error::NoSuchKey`] if the key does not exist.
    pub async fn get_object(&self, bucket: &str, key: &str) -> MockS3Result<GetObjectResult> {
        // Extract record fields while holding the locks, and drop both
        // guards before the storage read: parking_lot guards are !Send.
        let (etag, size, last_modified, metadata) = {
            let bucket_ref = self.state.get_bucket(bucket)?;
            let index = bucket_ref.objects.read();
            let obj = index.get(key).ok_or_else(|| MockS3Error::NoSuchKey {
                key: key.to_owned(),
            })?;
            (obj.etag.clone(), obj.size, obj.last_modified, obj.metadata.clone())
        };

        let body = self.storage.read(bucket, key).await?;

        Ok(GetObjectResult {
            body,
            etag,
            size,
            last_modified,
            metadata,
        })
    }

    /// Head an object: metadata without the payload.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    /// - [`MockS3Error::NoSuchKey`] if the key does not exist.
    pub fn head_object(&self, bucket: &str, key: &str) -> MockS3Result<HeadObjectResult> {
        let bucket_ref = self.state.get_bucket(bucket)?;
        let index = bucket_ref.objects.read();
        let obj = index.get(key).ok_or_else(|| MockS3Error::NoSuchKey {
            key: key.to_owned(),
        })?;

        Ok(HeadObjectResult {
            etag: obj.etag.clone(),
            size: obj.size,
            last_modified: obj.last_modified,
            storage_class: obj.storage_class.clone(),
            metadata: obj.metadata.clone(),
        })
    }

    /// Check whether an object exists.
    ///
    /// Returns `false` when the bucket itself is absent; this call never
    /// fails.
    #[must_use]
    pub fn object_exists(&self, bucket: &str, key: &str) -> bool {
        match self.state.get_bucket(bucket) {
            Ok(bucket_ref) => bucket_ref.objects.read().contains(key),
            Err(_) => false,
        }
    }

    /// Delete an object. Succeeds silently when the key is absent.
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    pub fn delete_object(&self, bucket: &str, key: &str) -> MockS3Result<bool> {
        let removed = {
            let bucket_ref = self.state.get_bucket(bucket)?;
            let mut index = bucket_ref.objects.write();
            index.delete(key).is_some()
        };

        if removed {
            self.storage.delete(bucket, key);
            debug!(bucket = %bucket, key = %key, "delete_object completed");
        }

        Ok(removed)
    }

    /// Delete multiple objects in one call.
    ///
    /// Returns the subset of keys that existed and were removed, in request
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`MockS3Error::NoSuchBucket`] if the bucket does not exist.
    pub fn delete_objects(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> MockS3Result<Vec<DeletedObject>> {
        let removed: Vec<DeletedObject> = {
            let bucket_ref = self.state.get_bucket(bucket)?;
            let mut index = bucket_ref.objects.write();
            keys.iter()
                .filter(|key| index.delete(key).is_some())
                .map(|key| DeletedObject { key: key.clone() })
                .collect()
        };

        for deleted in &removed {
            self.storage.delete(bucket, &deleted.key);
        }

        debug!(
            bucket = %bucket,
            requested = keys.len(),
            removed = removed.len(),
            "delete_objects completed"
        );
        Ok(removed)
    }

    /// Copy an object, payload and metadata, refreshing its last-modified
    /// timestamp.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchBucket`] if either bucket does not exist.
    /// - [`MockS3Error::NoSuchKey`] if the source key does not exist.
    pub async fn copy_object(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> MockS3Result<PutObjectResult> {
        validate_object_key(dst_key)?;

        // Validate both buckets and the source key up front, releasing all
        // guards before the payload copy.
        let metadata = {
            let src_ref = self.state.get_bucket(src_bucket)?;
            self.state.get_bucket(dst_bucket)?;
            let index = src_ref.objects.read();
            let obj = index.get(src_key).ok_or_else(|| MockS3Error::NoSuchKey {
                key: src_key.to_owned(),
            })?;
            obj.metadata.clone()
        };

        let write = self
            .storage
            .copy(src_bucket, src_key, dst_bucket, dst_key)
            .await?;

        let record = MockObject::new(
            dst_key.to_owned(),
            write.etag.clone(),
            write.size,
            metadata,
            self.owner.clone(),
        );

        {
            let dst_ref = self.state.get_bucket(dst_bucket)?;
            dst_ref.objects.write().put(record);
        }

        debug!(
            src_bucket,
            src_key, dst_bucket, dst_key, "copy_object completed"
        );

        Ok(PutObjectResult {
            etag: write.etag,
            size: write.size,
        })
    }

    /// Generate a fake presigned URL for an object.
    ///
    /// The URL is deterministic (`https://{bucket}.{domain}/{key}`) and is
    /// generated without checking that the bucket or key exists, matching
    /// the permissiveness of the real signer.
    #[must_use]
    pub fn presigned_url(&self, bucket: &str, key: &str) -> String {
        let encoded_key = utf8_percent_encode(key, KEY_PATH_SET);
        format!(
            "https://{bucket}.{domain}/{encoded_key}",
            domain = self.config.presign_domain
        )
    }
}
