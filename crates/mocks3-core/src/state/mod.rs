//! Engine state: buckets and their object records.
//!
//! - [`MockS3State`] -- top-level state owning all buckets
//! - [`MockBucket`] -- per-bucket state (metadata plus the key index)
//! - [`ObjectIndex`] / [`ListOutcome`] -- sorted key-level record storage
//! - [`MockObject`] -- per-object metadata record
//!
//! # Thread Safety
//!
//! All types are `Send + Sync`. The bucket table uses `DashMap`; each
//! bucket's key index sits behind a `parking_lot::RwLock`.

pub(crate) mod bucket;
pub(crate) mod index;
pub(crate) mod object;
pub(crate) mod service;

pub use bucket::MockBucket;
pub use index::{ListOutcome, ObjectIndex};
pub use object::MockObject;
pub use service::MockS3State;
