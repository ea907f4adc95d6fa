//! Contract tests for the `ObjectStore` trait, run against the mock through
//! dynamic dispatch the way consuming applications hold it.

use std::collections::HashSet;
use std::sync::Arc;

use mocks3_client::{MockS3Client, ObjectStore};
use mocks3_model::{ListObjectsRequest, S3ErrorCode};

fn store() -> Arc<dyn ObjectStore> {
    Arc::new(MockS3Client::default())
}

#[tokio::test]
async fn test_should_return_all_values_regardless_of_list_order() {
    let store = store();
    store
        .create_bucket("bucket")
        .await
        .unwrap_or_else(|e| panic!("create failed: {e}"));
    store
        .put_object_text("bucket", "file1.txt", "special content")
        .await
        .unwrap_or_else(|e| panic!("put file1 failed: {e}"));
    store
        .put_object_text("bucket", "file2.txt", "secret content")
        .await
        .unwrap_or_else(|e| panic!("put file2 failed: {e}"));

    let listing = store
        .list_objects("bucket", ListObjectsRequest::default())
        .await
        .unwrap_or_else(|e| panic!("list failed: {e}"));

    let mut contents = HashSet::new();
    for summary in &listing.contents {
        let content = store
            .get_object_as_string("bucket", &summary.key)
            .await
            .unwrap_or_else(|e| panic!("get {} failed: {e}", summary.key));
        contents.insert(content);
    }

    let expected: HashSet<String> = ["special content", "secret content"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(contents, expected);
}

#[tokio::test]
async fn test_should_return_only_latest_value_after_overwrite() {
    let store = store();
    store
        .create_bucket("bucket")
        .await
        .unwrap_or_else(|e| panic!("create failed: {e}"));

    store
        .put_object_text("bucket", "key", "first version")
        .await
        .unwrap_or_else(|e| panic!("put1 failed: {e}"));
    store
        .put_object_text("bucket", "key", "second version")
        .await
        .unwrap_or_else(|e| panic!("put2 failed: {e}"));

    let content = store
        .get_object_as_string("bucket", "key")
        .await
        .unwrap_or_else(|e| panic!("get failed: {e}"));
    assert_eq!(content, "second version");

    let listing = store
        .list_objects("bucket", ListObjectsRequest::default())
        .await
        .unwrap_or_else(|e| panic!("list failed: {e}"));
    assert_eq!(listing.contents.len(), 1);
}

#[tokio::test]
async fn test_should_fail_get_of_absent_key_with_no_such_key() {
    let store = store();
    store
        .create_bucket("bucket")
        .await
        .unwrap_or_else(|e| panic!("create failed: {e}"));

    let err = store
        .get_object_as_string("bucket", "missing")
        .await
        .expect_err("expected NoSuchKey");
    assert_eq!(err.code(), S3ErrorCode::NoSuchKey);
}

#[tokio::test]
async fn test_should_fail_operations_on_absent_bucket_with_no_such_bucket() {
    let store = store();

    let err = store
        .put_object_text("ghost", "key", "content")
        .await
        .expect_err("put should fail");
    assert_eq!(err.code(), S3ErrorCode::NoSuchBucket);

    let err = store
        .get_object("ghost", "key")
        .await
        .expect_err("get should fail");
    assert_eq!(err.code(), S3ErrorCode::NoSuchBucket);

    let err = store
        .list_objects("ghost", ListObjectsRequest::default())
        .await
        .expect_err("list should fail");
    assert_eq!(err.code(), S3ErrorCode::NoSuchBucket);

    let err = store
        .delete_object("ghost", "key")
        .await
        .expect_err("delete should fail");
    assert_eq!(err.code(), S3ErrorCode::NoSuchBucket);

    let err = store
        .delete_bucket("ghost")
        .await
        .expect_err("delete bucket should fail");
    assert_eq!(err.code(), S3ErrorCode::NoSuchBucket);
}

#[tokio::test]
async fn test_should_fail_duplicate_create_with_already_owned() {
    let store = store();
    store
        .create_bucket("taken")
        .await
        .unwrap_or_else(|e| panic!("create failed: {e}"));

    let err = store
        .create_bucket("taken")
        .await
        .expect_err("duplicate create should fail");
    assert_eq!(err.code(), S3ErrorCode::BucketAlreadyOwnedByYou);
}

#[tokio::test]
async fn test_should_protect_non_empty_bucket_then_allow_recreate() {
    let store = store();
    store
        .create_bucket("cycle")
        .await
        .unwrap_or_else(|e| panic!("create failed: {e}"));
    store
        .put_object_text("cycle", "file", "data")
        .await
        .unwrap_or_else(|e| panic!("put failed: {e}"));

    let err = store
        .delete_bucket("cycle")
        .await
        .expect_err("delete of non-empty bucket should fail");
    assert_eq!(err.code(), S3ErrorCode::BucketNotEmpty);

    store
        .delete_object("cycle", "file")
        .await
        .unwrap_or_else(|e| panic!("delete object failed: {e}"));
    store
        .delete_bucket("cycle")
        .await
        .unwrap_or_else(|e| panic!("delete bucket failed: {e}"));

    // The name is free again.
    store
        .create_bucket("cycle")
        .await
        .unwrap_or_else(|e| panic!("recreate failed: {e}"));
}

#[tokio::test]
async fn test_should_attach_request_id_to_failures() {
    let store = store();
    let err = store
        .get_object("nope", "nope")
        .await
        .expect_err("expected failure");
    let request_id = err.request_id().unwrap_or_default();
    assert_eq!(request_id.len(), 32);
}

#[tokio::test]
async fn test_should_report_existence_without_errors() {
    let store = store();
    store
        .create_bucket("bucket")
        .await
        .unwrap_or_else(|e| panic!("create failed: {e}"));
    store
        .put_object_text("bucket", "present", "x")
        .await
        .unwrap_or_else(|e| panic!("put failed: {e}"));

    assert!(store.bucket_exists("bucket").await.unwrap_or(false));
    assert!(!store.bucket_exists("ghost").await.unwrap_or(true));
    assert!(store.object_exists("bucket", "present").await.unwrap_or(false));
    assert!(!store.object_exists("bucket", "absent").await.unwrap_or(true));
    assert!(!store.object_exists("ghost", "present").await.unwrap_or(true));
}

#[tokio::test]
async fn test_should_generate_presigned_url_through_trait() {
    let store = store();
    let url = store
        .presigned_url("media", "videos/intro.mp4")
        .await
        .unwrap_or_else(|e| panic!("presign failed: {e}"));
    assert_eq!(url, "https://media.s3.aws.fake/videos/intro.mp4");
}

#[tokio::test]
async fn test_should_record_text_content_type_for_text_puts() {
    let store = store();
    store
        .create_bucket("bucket")
        .await
        .unwrap_or_else(|e| panic!("create failed: {e}"));
    store
        .put_object_text("bucket", "note.txt", "hello")
        .await
        .unwrap_or_else(|e| panic!("put failed: {e}"));

    let head = store
        .head_object("bucket", "note.txt")
        .await
        .unwrap_or_else(|e| panic!("head failed: {e}"));
    assert_eq!(head.metadata.content_type.as_deref(), Some("text/plain"));
    assert_eq!(head.size, 5);
}
