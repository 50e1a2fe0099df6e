use std::fs;
use std::path::Path;

use site_deploy_core::content_type::{IMMUTABLE_CACHE, NO_CACHE};
use site_deploy_core::{
    deploy, plan_deploy, BucketEvent, DeployError, DeployOptions, DeployStrategy, MemoryBucket,
    DEFAULT_ENTRY_DOCUMENT,
};

fn write_build(root: &Path) {
    fs::create_dir_all(root.join("assets")).expect("mkdir");
    fs::write(root.join("index.html"), "<!doctype html>").expect("write");
    fs::write(root.join("assets/index-4f1c.js"), "export {}").expect("write");
    fs::write(root.join("assets/index-9a0b.css"), "body{}").expect("write");
}

fn options(root: &Path, strategy: DeployStrategy) -> DeployOptions {
    DeployOptions {
        dist_dir: root.to_path_buf(),
        bucket: "interview-site".to_string(),
        entry_document: DEFAULT_ENTRY_DOCUMENT.to_string(),
        strategy,
    }
}

#[test]
fn upload_then_prune_syncs_bucket_with_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_build(dir.path());
    let bucket = MemoryBucket::with_objects(["index.html", "assets/index-old.js"]);

    let report =
        deploy(&bucket, &options(dir.path(), DeployStrategy::UploadThenPrune)).expect("deploy");

    assert!(report.policy_set);
    assert_eq!(report.uploaded, 3);
    assert_eq!(report.deleted, 1);
    assert_eq!(
        bucket.keys(),
        vec![
            "assets/index-4f1c.js".to_string(),
            "assets/index-9a0b.css".to_string(),
            "index.html".to_string(),
        ]
    );

    let entry = bucket.object("index.html").expect("entry uploaded");
    assert_eq!(entry.body, b"<!doctype html>".to_vec());
    assert_eq!(entry.content_type, "text/html");
    assert_eq!(entry.cache_control, NO_CACHE);

    let script = bucket.object("assets/index-4f1c.js").expect("script uploaded");
    assert_eq!(script.content_type, "application/javascript");
    assert_eq!(script.cache_control, IMMUTABLE_CACHE);
}

#[test]
fn upload_then_prune_never_empties_the_bucket() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_build(dir.path());
    let bucket = MemoryBucket::with_objects(["index.html", "assets/index-old.js"]);

    deploy(&bucket, &options(dir.path(), DeployStrategy::UploadThenPrune)).expect("deploy");

    let events = bucket.events();
    assert_eq!(events[0], BucketEvent::PolicySet);
    assert_eq!(
        events.last(),
        Some(&BucketEvent::Deleted("assets/index-old.js".to_string()))
    );
    assert_eq!(
        events[events.len() - 2],
        BucketEvent::Put("index.html".to_string())
    );
}

#[test]
fn clear_then_upload_deletes_before_any_upload() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_build(dir.path());
    let bucket = MemoryBucket::with_objects(["index.html", "stale.png"]);

    let report =
        deploy(&bucket, &options(dir.path(), DeployStrategy::ClearThenUpload)).expect("deploy");

    assert_eq!(report.deleted, 2);
    assert_eq!(report.uploaded, 3);
    let events = bucket.events();
    let first_put = events
        .iter()
        .position(|event| matches!(event, BucketEvent::Put(_)))
        .expect("uploads happened");
    let last_delete = events
        .iter()
        .rposition(|event| matches!(event, BucketEvent::Deleted(_)))
        .expect("deletes happened");
    assert!(last_delete < first_put);
    assert!(!bucket.keys().contains(&"stale.png".to_string()));
}

#[test]
fn first_failure_aborts_remaining_steps() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_build(dir.path());
    let bucket = MemoryBucket::with_objects(["assets/index-old.js"])
        .failing_on(&["assets/index-9a0b.css"]);

    let error = deploy(&bucket, &options(dir.path(), DeployStrategy::UploadThenPrune))
        .expect_err("upload must fail");

    match error {
        DeployError::Store { step, message } => {
            assert_eq!(step, "upload assets/index-9a0b.css");
            assert!(message.contains("injected failure"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        bucket.events(),
        vec![
            BucketEvent::PolicySet,
            BucketEvent::Put("assets/index-4f1c.js".to_string()),
        ]
    );
    assert!(bucket.keys().contains(&"assets/index-old.js".to_string()));
}

#[test]
fn missing_build_output_fails_before_touching_bucket() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bucket = MemoryBucket::new();

    let error = plan_deploy(
        &bucket,
        &options(&dir.path().join("dist"), DeployStrategy::UploadThenPrune),
    )
    .expect_err("missing dist");

    assert!(matches!(error, DeployError::MissingBuildOutput { .. }));
    assert!(bucket.events().is_empty());
    assert!(bucket.policy().is_none());
}
