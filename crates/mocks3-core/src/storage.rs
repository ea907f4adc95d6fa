//! Payload storage for object body data.
//!
//! Payloads at or below a configurable threshold are kept in memory as
//! [`Bytes`]. Larger payloads are spilled to temporary files on disk and
//! read back on demand; the file is removed when the entry is dropped.
//!
//! [`PayloadStore`] is thread-safe and uses [`DashMap`] keyed by
//! `(bucket, key)`.

use std::path::PathBuf;

use bytes::{Bytes, BytesMut};
use dashmap::DashMap;
use tokio::io::AsyncReadExt;
use tracing::{debug, trace, warn};

use crate::checksums;
use crate::error::MockS3Error;

/// Composite key identifying a stored payload: `(bucket, key)`.
type PayloadKey = (String, String);

/// Default maximum payload size (in bytes) kept in memory before spilling
/// to disk: 512 KiB.
const DEFAULT_MAX_MEMORY_SIZE: usize = 524_288;

/// Result of writing a payload.
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// The ETag (quoted hex MD5) of the written payload.
    pub etag: String,
    /// The payload size in bytes.
    pub size: u64,
}

/// Internal representation of a stored payload.
///
/// When an [`StoredPayload::OnDisk`] value is dropped, the temporary file is
/// removed.
enum StoredPayload {
    /// Small payloads kept entirely in memory.
    InMemory {
        /// The raw payload bytes.
        data: Bytes,
    },
    /// Large payloads spilled to a temp file.
    OnDisk {
        /// Path to the temporary file.
        path: PathBuf,
        /// Size of the stored payload in bytes.
        size: u64,
    },
}

impl std::fmt::Debug for StoredPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InMemory { data } => f
                .debug_struct("InMemory")
                .field("size", &data.len())
                .finish(),
            Self::OnDisk { path, size } => f
                .debug_struct("OnDisk")
                .field("path", path)
                .field("size", size)
                .finish(),
        }
    }
}

impl Drop for StoredPayload {
    fn drop(&mut self) {
        if let Self::OnDisk { path, .. } = self {
            if let Err(e) = std::fs::remove_file(path.as_path()) {
                // The file may already be gone; only warn on other errors.
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %e, "failed to remove temp file");
                }
            } else {
                trace!(path = %path.display(), "removed temp file");
            }
        }
    }
}

impl StoredPayload {
    /// Read the full payload from this entry.
    async fn read_all(&self) -> Result<Bytes, MockS3Error> {
        match self {
            Self::InMemory { data } => Ok(data.clone()),
            Self::OnDisk { path, size } => {
                let mut file = tokio::fs::File::open(path).await.map_err(|e| {
                    MockS3Error::Internal(anyhow::anyhow!(
                        "failed to open temp file {}: {e}",
                        path.display()
                    ))
                })?;
                let capacity = usize::try_from(*size).unwrap_or(usize::MAX);
                let mut buf = BytesMut::with_capacity(capacity);
                file.read_buf(&mut buf).await.map_err(|e| {
                    MockS3Error::Internal(anyhow::anyhow!(
                        "failed to read temp file {}: {e}",
                        path.display()
                    ))
                })?;
                Ok(buf.freeze())
            }
        }
    }
}

/// Payload storage with automatic spillover to tempfiles for large objects.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use mocks3_core::storage::PayloadStore;
///
/// # tokio_test::block_on(async {
/// let store = PayloadStore::new(1024);
/// let result = store
///     .write("my-bucket", "hello.txt", Bytes::from("hello"))
///     .await
///     .unwrap();
/// assert_eq!(result.size, 5);
///
/// let data = store.read("my-bucket", "hello.txt").await.unwrap();
/// assert_eq!(data.as_ref(), b"hello");
/// # });
/// ```
pub struct PayloadStore {
    /// Payloads keyed by `(bucket, key)`.
    payloads: DashMap<PayloadKey, StoredPayload>,
    /// Max size in bytes for in-memory storage before spilling to disk.
    max_memory_size: usize,
}

impl std::fmt::Debug for PayloadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadStore")
            .field("payload_count", &self.payloads.len())
            .field("max_memory_size", &self.max_memory_size)
            .finish()
    }
}

impl Default for PayloadStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MEMORY_SIZE)
    }
}

impl PayloadStore {
    /// Create a new payload store with the given memory threshold.
    ///
    /// Payloads larger than `max_memory_size` bytes are spilled to
    /// temporary files on disk.
    #[must_use]
    pub fn new(max_memory_size: usize) -> Self {
        debug!(max_memory_size, "creating PayloadStore");
        Self {
            payloads: DashMap::new(),
            max_memory_size,
        }
    }

    /// Store a payload. Computes the MD5 ETag and returns a [`WriteResult`].
    ///
    /// # Errors
    ///
    /// Returns [`MockS3Error::Internal`] if the temporary file cannot be
    /// created or written.
    pub async fn write(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
    ) -> Result<WriteResult, MockS3Error> {
        let etag = checksums::compute_etag(&data);
        let size = data.len() as u64;

        let stored = self.store_payload(data).await?;

        trace!(bucket, key, size, "stored payload");
        self.payloads
            .insert((bucket.to_owned(), key.to_owned()), stored);

        Ok(WriteResult { etag, size })
    }

    /// Read a payload. Returns the full [`Bytes`] for the object.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchKey`] if the payload is not found.
    /// - [`MockS3Error::Internal`] if the on-disk file cannot be read.
    pub async fn read(&self, bucket: &str, key: &str) -> Result<Bytes, MockS3Error> {
        let payload_key = (bucket.to_owned(), key.to_owned());
        let entry = self
            .payloads
            .get(&payload_key)
            .ok_or_else(|| MockS3Error::NoSuchKey {
                key: key.to_owned(),
            })?;

        entry.value().read_all().await
    }

    /// Copy a payload from one location to another.
    ///
    /// Returns a [`WriteResult`] for the destination.
    ///
    /// # Errors
    ///
    /// - [`MockS3Error::NoSuchKey`] if the source payload is not found.
    /// - [`MockS3Error::Internal`] if disk I/O fails.
    pub async fn copy(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> Result<WriteResult, MockS3Error> {
        let data = self.read(src_bucket, src_key).await?;

        debug!(
            src_bucket,
            src_key,
            dst_bucket,
            dst_key,
            size = data.len(),
            "copying payload"
        );

        self.write(dst_bucket, dst_key, data).await
    }

    /// Delete a payload. No-op if the payload does not exist.
    pub fn delete(&self, bucket: &str, key: &str) {
        let payload_key = (bucket.to_owned(), key.to_owned());
        if self.payloads.remove(&payload_key).is_some() {
            trace!(bucket, key, "deleted payload");
        }
    }

    /// Delete all payloads belonging to a bucket.
    pub fn delete_bucket_payloads(&self, bucket: &str) {
        let before = self.payloads.len();
        self.payloads.retain(|key, _| key.0 != bucket);
        debug!(
            bucket,
            removed = before - self.payloads.len(),
            "deleted all bucket payloads"
        );
    }

    /// Reset the store, removing every payload.
    pub fn reset(&self) {
        debug!("resetting all payload storage");
        self.payloads.clear();
    }

    /// Store a payload either in memory or on disk, depending on size.
    async fn store_payload(&self, data: Bytes) -> Result<StoredPayload, MockS3Error> {
        if data.len() > self.max_memory_size {
            self.spill_to_disk(&data).await
        } else {
            Ok(StoredPayload::InMemory { data })
        }
    }

    /// Write a payload to a temporary file and return a
    /// [`StoredPayload::OnDisk`].
    async fn spill_to_disk(&self, data: &[u8]) -> Result<StoredPayload, MockS3Error> {
        let size = data.len() as u64;

        // Create the temp file synchronously, then persist it so it is not
        // deleted when the NamedTempFile handle is dropped -- cleanup is
        // handled by the Drop impl on StoredPayload.
        let temp = tempfile::NamedTempFile::new().map_err(|e| {
            MockS3Error::Internal(anyhow::anyhow!("failed to create temp file: {e}"))
        })?;
        let path = temp.path().to_path_buf();

        temp.persist(&path).map_err(|e| {
            MockS3Error::Internal(anyhow::anyhow!(
                "failed to persist temp file {}: {e}",
                path.display()
            ))
        })?;

        tokio::fs::write(&path, data).await.map_err(|e| {
            MockS3Error::Internal(anyhow::anyhow!(
                "failed to write temp file {}: {e}",
                path.display()
            ))
        })?;

        trace!(path = %path.display(), size, "spilled payload to disk");
        Ok(StoredPayload::OnDisk { path, size })
    }
}
