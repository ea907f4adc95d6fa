//! End-to-end consumer flow: a small log-triage job wired against
//! `Arc<dyn ObjectStore>`, the way an application would be wired against a
//! real client in production and the mock in tests.

use std::sync::Arc;

use mocks3_client::{MockS3Client, ObjectStore};
use mocks3_model::input::ListObjectsV2Request;
use mocks3_model::{ListObjectsRequest, S3Error};

/// Scans a source bucket, archives every log file that mentions an error
/// into the alerts bucket, and drains the source.
struct LogTriage {
    source_bucket: String,
    alerts_bucket: String,
    store: Arc<dyn ObjectStore>,
}

impl LogTriage {
    fn new(source_bucket: &str, alerts_bucket: &str, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            source_bucket: source_bucket.to_owned(),
            alerts_bucket: alerts_bucket.to_owned(),
            store,
        }
    }

    /// Process every object in the source bucket; returns the number of
    /// alerts raised.
    async fn run(&self) -> Result<usize, S3Error> {
        let mut alerts = 0;

        let listing = self
            .store
            .list_objects(&self.source_bucket, ListObjectsRequest::default())
            .await?;

        for summary in &listing.contents {
            let content = self
                .store
                .get_object_as_string(&self.source_bucket, &summary.key)
                .await?;

            if content.to_ascii_lowercase().contains("error") {
                alerts += 1;
                self.store
                    .copy_object(
                        &self.source_bucket,
                        &summary.key,
                        &self.alerts_bucket,
                        &format!("alert-{alerts}"),
                    )
                    .await?;
            }

            self.store
                .delete_object(&self.source_bucket, &summary.key)
                .await?;
        }

        Ok(alerts)
    }
}

async fn seed_store() -> Arc<dyn ObjectStore> {
    let store: Arc<dyn ObjectStore> = Arc::new(MockS3Client::default());

    store
        .create_bucket("incoming-logs")
        .await
        .unwrap_or_else(|e| panic!("create source failed: {e}"));
    store
        .create_bucket("alerts")
        .await
        .unwrap_or_else(|e| panic!("create alerts failed: {e}"));

    let fixtures = [
        ("app-1.log", "startup complete, all systems nominal"),
        ("app-2.log", "ERROR: connection refused by upstream"),
        ("app-3.log", "request served in 12ms"),
        ("app-4.log", "disk error detected on volume /dev/sda1"),
        ("app-5.log", "cache warmed with 4096 entries"),
        ("app-6.log", "Error while flushing the write-ahead log"),
    ];
    for (key, content) in fixtures {
        store
            .put_object_text("incoming-logs", key, content)
            .await
            .unwrap_or_else(|e| panic!("seed {key} failed: {e}"));
    }

    store
}

#[tokio::test]
async fn test_should_archive_error_logs_and_drain_source() {
    let store = seed_store().await;
    let triage = LogTriage::new("incoming-logs", "alerts", Arc::clone(&store));

    let alerts = triage.run().await.unwrap_or_else(|e| panic!("run failed: {e}"));
    assert_eq!(alerts, 3);

    // The source bucket was fully drained.
    let remaining = store
        .list_objects_v2("incoming-logs", ListObjectsV2Request::default())
        .await
        .unwrap_or_else(|e| panic!("list source failed: {e}"));
    assert_eq!(remaining.key_count, 0);

    // Every flagged log landed in the alerts bucket, order-independent.
    let archived = store
        .list_objects_v2("alerts", ListObjectsV2Request::default())
        .await
        .unwrap_or_else(|e| panic!("list alerts failed: {e}"));
    let mut keys: Vec<String> = archived.contents.iter().map(|o| o.key.clone()).collect();
    keys.sort();
    assert_eq!(keys, vec!["alert-1", "alert-2", "alert-3"]);
}

#[tokio::test]
async fn test_should_preserve_alert_contents() {
    let store = seed_store().await;
    let triage = LogTriage::new("incoming-logs", "alerts", Arc::clone(&store));
    triage.run().await.unwrap_or_else(|e| panic!("run failed: {e}"));

    let listing = store
        .list_objects("alerts", ListObjectsRequest::default())
        .await
        .unwrap_or_else(|e| panic!("list alerts failed: {e}"));

    for summary in &listing.contents {
        let content = store
            .get_object_as_string("alerts", &summary.key)
            .await
            .unwrap_or_else(|e| panic!("get {} failed: {e}", summary.key));
        assert!(
            content.to_ascii_lowercase().contains("error"),
            "archived log {} should mention an error: {content}",
            summary.key
        );
    }
}

#[tokio::test]
async fn test_should_raise_no_alerts_for_clean_source() {
    let store: Arc<dyn ObjectStore> = Arc::new(MockS3Client::default());
    store
        .create_bucket("incoming-logs")
        .await
        .unwrap_or_else(|e| panic!("create source failed: {e}"));
    store
        .create_bucket("alerts")
        .await
        .unwrap_or_else(|e| panic!("create alerts failed: {e}"));
    store
        .put_object_text("incoming-logs", "quiet.log", "nothing to report")
        .await
        .unwrap_or_else(|e| panic!("seed failed: {e}"));

    let triage = LogTriage::new("incoming-logs", "alerts", Arc::clone(&store));
    let alerts = triage.run().await.unwrap_or_else(|e| panic!("run failed: {e}"));
    assert_eq!(alerts, 0);

    let archived = store
        .list_objects_v2("alerts", ListObjectsV2Request::default())
        .await
        .unwrap_or_else(|e| panic!("list alerts failed: {e}"));
    assert_eq!(archived.key_count, 0);
}
