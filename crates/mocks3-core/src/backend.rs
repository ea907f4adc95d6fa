//! The engine facade.
//!
//! [`MockS3Backend`] owns all service state (buckets, object records) and
//! the payload store. Individual operations are implemented in the
//! [`crate::ops`] submodules and surfaced as inherent methods.

use std::sync::Arc;

use mocks3_model::types::Owner;

use crate::config::MockS3Config;
use crate::state::MockS3State;
use crate::storage::PayloadStore;

/// The in-memory S3 engine.
///
/// All fields are `Arc`-wrapped for cheap cloning and shared ownership
/// across tasks.
///
/// # Examples
///
/// ```
/// use mocks3_core::{MockS3Backend, MockS3Config};
///
/// let backend = MockS3Backend::new(MockS3Config::default());
/// assert!(backend.list_buckets().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MockS3Backend {
    /// Bucket and object metadata state.
    pub(crate) state: Arc<MockS3State>,
    /// Object payload storage (in-memory with disk spillover).
    pub(crate) storage: Arc<PayloadStore>,
    /// Engine configuration.
    pub(crate) config: Arc<MockS3Config>,
    /// The identity stamped on buckets and objects this backend creates.
    pub(crate) owner: Owner,
}

impl MockS3Backend {
    /// Create a new engine with the given configuration.
    #[must_use]
    pub fn new(config: MockS3Config) -> Self {
        let storage = PayloadStore::new(config.max_memory_object_size);
        Self {
            state: Arc::new(MockS3State::new()),
            storage: Arc::new(storage),
            config: Arc::new(config),
            owner: Owner::default(),
        }
    }

    /// Create a new engine with an explicit caller identity.
    #[must_use]
    pub fn with_owner(config: MockS3Config, owner: Owner) -> Self {
        let mut backend = Self::new(config);
        backend.owner = owner;
        backend
    }

    /// Returns a reference to the service state.
    #[must_use]
    pub fn state(&self) -> &MockS3State {
        &self.state
    }

    /// Returns a reference to the payload store.
    #[must_use]
    pub fn storage(&self) -> &PayloadStore {
        &self.storage
    }

    /// Returns a reference to the engine configuration.
    #[must_use]
    pub fn config(&self) -> &MockS3Config {
        &self.config
    }

    /// Returns the identity this backend stamps on what it creates.
    #[must_use]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Reset all state (buckets, object records, payloads).
    ///
    /// This is the explicit-teardown hook for test suites sharing one
    /// backend across cases.
    pub fn reset(&self) {
        self.state.reset();
        self.storage.reset();
    }
}

impl Default for MockS3Backend {
    fn default() -> Self {
        Self::new(MockS3Config::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_should_create_backend_with_defaults() {
        let backend = MockS3Backend::new(MockS3Config::default());
        assert_eq!(backend.config().default_region, "us-east-1");
        assert!(backend.list_buckets().is_empty());
    }

    #[test]
    fn test_should_share_via_arc() {
        let backend = Arc::new(MockS3Backend::default());
        let clone = Arc::clone(&backend);
        assert_eq!(
            backend.config().default_region,
            clone.config().default_region
        );
    }

    #[test]
    fn test_should_use_custom_owner() {
        let owner = Owner {
            id: "custom-id".to_owned(),
            display_name: "custom".to_owned(),
        };
        let backend = MockS3Backend::with_owner(MockS3Config::default(), owner);
        assert_eq!(backend.owner().display_name, "custom");
    }

    #[test]
    fn test_should_reset_state() {
        let backend = MockS3Backend::default();
        backend
            .create_bucket("test-bucket")
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        assert!(backend.bucket_exists("test-bucket"));

        backend.reset();
        assert!(!backend.bucket_exists("test-bucket"));
    }
}
