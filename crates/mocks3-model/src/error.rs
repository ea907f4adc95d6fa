//! Error codes and the typed error surfaced to consumers.
//!
//! [`S3ErrorCode`] enumerates the AWS error code strings this mock can
//! produce, together with the default HTTP status and message the real
//! service attaches to each. [`S3Error`] is the error value returned by
//! every fallible client operation: a code plus a human-readable message,
//! the resource involved, and a request ID.

use std::fmt;

/// Well-known S3 error codes producible by the mock.
///
/// Each code carries the canonical string representation, the default HTTP
/// status the real service would respond with, and a default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum S3ErrorCode {
    /// The requested bucket name is taken by a different owner.
    BucketAlreadyExists,
    /// The requested bucket name is already owned by the caller.
    BucketAlreadyOwnedByYou,
    /// The bucket is not empty and cannot be deleted.
    BucketNotEmpty,
    /// An unexpected internal failure.
    InternalError,
    /// An argument in the request is invalid.
    InvalidArgument,
    /// The bucket name violates the naming rules.
    InvalidBucketName,
    /// The object key exceeds the maximum length.
    KeyTooLongError,
    /// The specified bucket does not exist.
    NoSuchBucket,
    /// The specified key does not exist.
    NoSuchKey,
}

impl S3ErrorCode {
    /// Returns the error code as its canonical string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BucketAlreadyExists => "BucketAlreadyExists",
            Self::BucketAlreadyOwnedByYou => "BucketAlreadyOwnedByYou",
            Self::BucketNotEmpty => "BucketNotEmpty",
            Self::InternalError => "InternalError",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidBucketName => "InvalidBucketName",
            Self::KeyTooLongError => "KeyTooLongError",
            Self::NoSuchBucket => "NoSuchBucket",
            Self::NoSuchKey => "NoSuchKey",
        }
    }

    /// Returns the HTTP status the real service pairs with this code.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidArgument | Self::InvalidBucketName | Self::KeyTooLongError => {
                http::StatusCode::BAD_REQUEST
            }
            Self::NoSuchBucket | Self::NoSuchKey => http::StatusCode::NOT_FOUND,
            Self::BucketAlreadyExists | Self::BucketAlreadyOwnedByYou | Self::BucketNotEmpty => {
                http::StatusCode::CONFLICT
            }
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this code.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BucketAlreadyExists => "The requested bucket name is not available",
            Self::BucketAlreadyOwnedByYou => "The bucket is already owned by you",
            Self::BucketNotEmpty => "The bucket you tried to delete is not empty",
            Self::InternalError => "Internal server error",
            Self::InvalidArgument => "Invalid Argument",
            Self::InvalidBucketName => "The specified bucket is not valid",
            Self::KeyTooLongError => "Your key is too long",
            Self::NoSuchBucket => "The specified bucket does not exist",
            Self::NoSuchKey => "The specified key does not exist",
        }
    }
}

impl fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error value returned by every fallible mock operation.
///
/// Mirrors the shape of an S3 error response: a code, a message, the
/// resource the request touched, and a request ID attributed to the failed
/// call.
#[derive(Debug, thiserror::Error)]
#[error("{code}: {message}")]
pub struct S3Error {
    /// The error code.
    code: S3ErrorCode,
    /// A human-readable error message.
    message: String,
    /// The resource (bucket or bucket/key) that caused the error.
    resource: Option<String>,
    /// The request ID attributed to the failed call.
    request_id: Option<String>,
}

impl S3Error {
    /// Create an error with the given code and message.
    #[must_use]
    pub fn with_message(code: S3ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource: None,
            request_id: None,
        }
    }

    /// Create an error with the code's default message.
    #[must_use]
    pub fn from_code(code: S3ErrorCode) -> Self {
        Self::with_message(code, code.default_message())
    }

    /// Attach the resource the request touched.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Attach a request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// The error code.
    #[must_use]
    pub fn code(&self) -> S3ErrorCode {
        self.code
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The resource the request touched, if recorded.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// The request ID attributed to the failed call, if recorded.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The HTTP status the real service would respond with.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        self.code.default_status_code()
    }
}
