//! Engine configuration.
//!
//! Configuration values are loaded from `MOCKS3_*` environment variables
//! with sensible defaults, so test harnesses can tune the mock without code
//! changes.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Configuration for the mock storage engine.
///
/// # Examples
///
/// ```
/// use mocks3_core::MockS3Config;
///
/// let config = MockS3Config::default();
/// assert_eq!(config.default_region, "us-east-1");
///
/// let config = MockS3Config::builder().max_memory_object_size(1024).build();
/// assert_eq!(config.max_memory_object_size, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct MockS3Config {
    /// Maximum payload size (in bytes) kept entirely in memory before
    /// spilling to disk.
    #[builder(default = 524_288)]
    pub max_memory_object_size: usize,

    /// Region reported for newly created buckets.
    #[builder(default = String::from("us-east-1"))]
    pub default_region: String,

    /// Domain used when generating fake presigned URLs
    /// (`https://{bucket}.{domain}/{key}`).
    #[builder(default = String::from("s3.aws.fake"))]
    pub presign_domain: String,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for MockS3Config {
    fn default() -> Self {
        Self {
            max_memory_object_size: 524_288,
            default_region: String::from("us-east-1"),
            presign_domain: String::from("s3.aws.fake"),
            log_level: String::from("info"),
        }
    }
}

impl MockS3Config {
    /// Load configuration from environment variables.
    ///
    /// Reads the following variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `MOCKS3_MAX_MEMORY_OBJECT_SIZE` | `524288` |
    /// | `MOCKS3_DEFAULT_REGION` | `us-east-1` |
    /// | `MOCKS3_PRESIGN_DOMAIN` | `s3.aws.fake` |
    /// | `MOCKS3_LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("MOCKS3_MAX_MEMORY_OBJECT_SIZE") {
            if let Ok(size) = v.parse::<usize>() {
                config.max_memory_object_size = size;
            }
        }
        if let Ok(v) = std::env::var("MOCKS3_DEFAULT_REGION") {
            config.default_region = v;
        }
        if let Ok(v) = std::env::var("MOCKS3_PRESIGN_DOMAIN") {
            config.presign_domain = v;
        }
        if let Ok(v) = std::env::var("MOCKS3_LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}
