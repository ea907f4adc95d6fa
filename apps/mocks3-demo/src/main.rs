//! mocks3 demo - drives the in-memory store through the `ObjectStore` trait.
//!
//! Seeds a source bucket with sample log files, runs a small triage job
//! that archives every log mentioning an error, and prints the resulting
//! listings. Everything happens in-process against the mock; no network,
//! no credentials.
//!
//! # Usage
//!
//! ```text
//! MOCKS3_LOG_LEVEL=debug mocks3-demo
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MOCKS3_MAX_MEMORY_OBJECT_SIZE` | `524288` | Spillover threshold in bytes |
//! | `MOCKS3_DEFAULT_REGION` | `us-east-1` | Region reported for buckets |
//! | `MOCKS3_PRESIGN_DOMAIN` | `s3.aws.fake` | Presigned-URL domain |
//! | `MOCKS3_LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `MOCKS3_LOG_LEVEL`) |

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mocks3_client::{MockS3Client, ObjectStore};
use mocks3_core::MockS3Config;
use mocks3_model::input::ListObjectsV2Request;
use mocks3_model::ListObjectsRequest;

/// Demo version reported in the startup log line.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bucket the sample logs are seeded into.
const SOURCE_BUCKET: &str = "incoming-logs";

/// Bucket flagged logs are archived into.
const ALERTS_BUCKET: &str = "alerts";

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `MOCKS3_LOG_LEVEL`
/// config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Seed the source bucket with sample log files.
async fn seed(store: &Arc<dyn ObjectStore>) -> Result<()> {
    store.create_bucket(SOURCE_BUCKET).await?;
    store.create_bucket(ALERTS_BUCKET).await?;

    let fixtures = [
        ("app-1.log", "startup complete, all systems nominal"),
        ("app-2.log", "ERROR: connection refused by upstream"),
        ("app-3.log", "request served in 12ms"),
        ("app-4.log", "disk error detected on volume /dev/sda1"),
        ("app-5.log", "cache warmed with 4096 entries"),
    ];
    for (key, content) in fixtures {
        let result = store.put_object_text(SOURCE_BUCKET, key, content).await?;
        info!(bucket = SOURCE_BUCKET, key, etag = %result.etag, "seeded object");
    }

    Ok(())
}

/// Archive every log in the source bucket that mentions an error, then
/// drain the source. Returns the number of alerts raised.
async fn triage(store: &Arc<dyn ObjectStore>) -> Result<usize> {
    let mut alerts = 0;

    let listing = store
        .list_objects(SOURCE_BUCKET, ListObjectsRequest::default())
        .await?;

    for summary in &listing.contents {
        let content = store
            .get_object_as_string(SOURCE_BUCKET, &summary.key)
            .await?;

        if content.to_ascii_lowercase().contains("error") {
            alerts += 1;
            let alert_key = format!("alert-{alerts}");
            store
                .copy_object(SOURCE_BUCKET, &summary.key, ALERTS_BUCKET, &alert_key)
                .await?;
            info!(from = %summary.key, to = %alert_key, "archived alert");
        }

        store.delete_object(SOURCE_BUCKET, &summary.key).await?;
    }

    Ok(alerts)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = MockS3Config::from_env();

    init_tracing(&config.log_level)?;

    info!(
        default_region = %config.default_region,
        presign_domain = %config.presign_domain,
        max_memory_object_size = config.max_memory_object_size,
        version = VERSION,
        "starting mocks3 demo",
    );

    let store: Arc<dyn ObjectStore> = Arc::new(MockS3Client::new(config));

    seed(&store).await?;
    let alerts = triage(&store).await?;
    info!(alerts, "triage finished");

    // Show what ended up in the alerts bucket.
    let archived = store
        .list_objects_v2(ALERTS_BUCKET, ListObjectsV2Request::default())
        .await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&archived).context("failed to render listing")?
    );

    for summary in &archived.contents {
        let url = store.presigned_url(ALERTS_BUCKET, &summary.key).await?;
        println!("{key}: {url}", key = summary.key);
    }

    Ok(())
}
