//! Engine-level error types.
//!
//! [`MockS3Error`] is the domain error produced inside the engine. Each
//! variant maps to a concrete [`S3ErrorCode`] through [`into_s3_error`],
//! which also stamps a fresh request ID so failures look like individual
//! service responses.
//!
//! [`into_s3_error`]: MockS3Error::into_s3_error

use mocks3_model::{S3Error, S3ErrorCode};

use crate::utils::generate_request_id;

/// Errors produced by the mock storage engine.
#[derive(Debug, thiserror::Error)]
pub enum MockS3Error {
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The specified key does not exist.
    #[error("The specified key does not exist: {key}")]
    NoSuchKey {
        /// The key that was not found.
        key: String,
    },

    /// The requested bucket name is taken by a different owner.
    #[error("The requested bucket name is not available: {bucket}")]
    BucketAlreadyExists {
        /// The bucket name that is taken.
        bucket: String,
    },

    /// The caller already owns a bucket with this name.
    #[error(
        "Your previous request to create the named bucket succeeded and you already own it: {bucket}"
    )]
    BucketAlreadyOwnedByYou {
        /// The bucket name that is already owned.
        bucket: String,
    },

    /// The bucket is not empty and cannot be deleted.
    #[error("The bucket you tried to delete is not empty: {bucket}")]
    BucketNotEmpty {
        /// The bucket name that is not empty.
        bucket: String,
    },

    /// The bucket name violates the naming rules.
    #[error("Invalid bucket name: {name}: {reason}")]
    InvalidBucketName {
        /// The invalid bucket name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// The object key exceeds the maximum length.
    #[error("Your key is too long")]
    KeyTooLong,

    /// An argument provided is invalid.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl MockS3Error {
    /// Convert this error into the [`S3Error`] surfaced to consumers.
    ///
    /// Attaches the matching error code, the originating resource where one
    /// is known, and a freshly generated request ID.
    #[must_use]
    pub fn into_s3_error(self) -> S3Error {
        let message = self.to_string();
        let resource = self.resource();
        let code = error_code(&self);

        let mut err = S3Error::with_message(code, message).with_request_id(generate_request_id());
        if let Some(resource) = resource {
            err = err.with_resource(resource);
        }
        err
    }

    /// The resource (bucket or key) this error refers to, if any.
    fn resource(&self) -> Option<String> {
        match self {
            Self::NoSuchBucket { bucket }
            | Self::BucketAlreadyExists { bucket }
            | Self::BucketAlreadyOwnedByYou { bucket }
            | Self::BucketNotEmpty { bucket } => Some(bucket.clone()),
            Self::NoSuchKey { key } => Some(key.clone()),
            Self::InvalidBucketName { name, .. } => Some(name.clone()),
            Self::KeyTooLong | Self::InvalidArgument { .. } | Self::Internal(_) => None,
        }
    }
}

impl From<MockS3Error> for S3Error {
    fn from(err: MockS3Error) -> Self {
        err.into_s3_error()
    }
}

/// Map a [`MockS3Error`] variant to the corresponding [`S3ErrorCode`].
fn error_code(err: &MockS3Error) -> S3ErrorCode {
    match err {
        MockS3Error::NoSuchBucket { .. } => S3ErrorCode::NoSuchBucket,
        MockS3Error::NoSuchKey { .. } => S3ErrorCode::NoSuchKey,
        MockS3Error::BucketAlreadyExists { .. } => S3ErrorCode::BucketAlreadyExists,
        MockS3Error::BucketAlreadyOwnedByYou { .. } => S3ErrorCode::BucketAlreadyOwnedByYou,
        MockS3Error::BucketNotEmpty { .. } => S3ErrorCode::BucketNotEmpty,
        MockS3Error::InvalidBucketName { .. } => S3ErrorCode::InvalidBucketName,
        MockS3Error::KeyTooLong => S3ErrorCode::KeyTooLongError,
        MockS3Error::InvalidArgument { .. } => S3ErrorCode::InvalidArgument,
        MockS3Error::Internal(_) => S3ErrorCode::InternalError,
    }
}

/// Convenience result type for engine operations.
pub type MockS3Result<T> = Result<T, MockS3Error>;
