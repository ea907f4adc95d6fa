//! Client abstraction for the mocks3 test double.
//!
//! [`ObjectStore`] is the capability trait consuming code is written
//! against; [`MockS3Client`] is the in-memory implementation backed by
//! [`mocks3_core::MockS3Backend`]. Applications receive an
//! `Arc<dyn ObjectStore>` at construction time, so tests inject the mock
//! where production wiring would inject a remote client.

pub mod client;
pub mod mock;

pub use client::ObjectStore;
pub use mock::MockS3Client;
