use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::assets::collect_assets;
use crate::error::DeployError;
use crate::plan::{DeployPlan, DeployStep, DeployStrategy};
use crate::store::{BucketStore, PutObject};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    pub dist_dir: PathBuf,
    pub bucket: String,
    pub entry_document: String,
    pub strategy: DeployStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployReport {
    pub bucket: String,
    pub policy_set: bool,
    pub uploaded: usize,
    pub deleted: usize,
}

/// Collects the build output, lists the bucket and builds the plan that
/// [`execute_plan`] will run.
pub fn plan_deploy(
    store: &dyn BucketStore,
    options: &DeployOptions,
) -> Result<DeployPlan, DeployError> {
    let assets = collect_assets(&options.dist_dir, &options.entry_document)?;
    let existing_keys = store
        .list_keys()
        .map_err(|message| DeployError::store("list objects", message))?;
    debug!(
        local = assets.len(),
        remote = existing_keys.len(),
        "planning deploy"
    );

    Ok(DeployPlan::build(
        &options.bucket,
        options.strategy,
        &options.entry_document,
        assets,
        existing_keys,
    ))
}

pub fn deploy(
    store: &dyn BucketStore,
    options: &DeployOptions,
) -> Result<DeployReport, DeployError> {
    let plan = plan_deploy(store, options)?;
    execute_plan(store, &plan)
}

/// Runs every step in order. The first failure aborts the run; nothing is
/// retried or rolled back.
pub fn execute_plan(
    store: &dyn BucketStore,
    plan: &DeployPlan,
) -> Result<DeployReport, DeployError> {
    info!(
        bucket = %plan.bucket,
        strategy = ?plan.strategy,
        uploads = plan.upload_count(),
        deletes = plan.delete_count(),
        "starting deploy"
    );

    let mut report = DeployReport {
        bucket: plan.bucket.clone(),
        ..DeployReport::default()
    };

    for step in &plan.steps {
        let fail = |message: String| DeployError::store(step.describe(), message);
        match step {
            DeployStep::SetPolicy { policy } => {
                store.put_bucket_policy(policy).map_err(fail)?;
                report.policy_set = true;
                info!("bucket policy updated for public read access");
            }
            DeployStep::Upload(asset) => {
                let body =
                    fs::read(&asset.path).map_err(|error| DeployError::io(&asset.path, error))?;
                store
                    .put_object(PutObject {
                        key: asset.key.clone(),
                        body,
                        content_type: asset.content_type,
                        cache_control: asset.cache_control,
                    })
                    .map_err(fail)?;
                report.uploaded += 1;
                info!(key = %asset.key, content_type = asset.content_type, "uploaded");
            }
            DeployStep::Delete { key } => {
                store.delete_object(key).map_err(fail)?;
                report.deleted += 1;
                info!(key = %key, "deleted");
            }
        }
    }

    info!(
        uploaded = report.uploaded,
        deleted = report.deleted,
        "deploy completed"
    );
    Ok(report)
}
