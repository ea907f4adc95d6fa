//! Shared data model for the mocks3 in-memory S3 test double.
//!
//! This crate defines the types exchanged between the storage engine
//! (`mocks3-core`), the client abstraction (`mocks3-client`), and consuming
//! test code: error codes and the typed [`S3Error`], bucket and object
//! metadata types, request option structs, and operation outputs.
//!
//! Nothing here performs I/O; the crate is a pure vocabulary shared across
//! the workspace.

pub mod error;
pub mod input;
pub mod output;
pub mod types;

pub use error::{S3Error, S3ErrorCode};
pub use input::{ListObjectsRequest, ListObjectsV2Request, PutObjectOptions};
pub use output::{
    DeletedObject, GetObjectResult, HeadObjectResult, ListObjectsV2Result, ObjectListing,
    PutObjectResult,
};
pub use types::{BucketInfo, ObjectMetadata, ObjectSummary, Owner};
