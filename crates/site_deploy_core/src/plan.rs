//! Ordering of the calls that bring a bucket in line with the build output.
//!
//! Whatever the strategy, the public-read policy is set before the first
//! upload and no key is deleted after it has been uploaded.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::assets::LocalAsset;
use crate::policy::public_read_policy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployStrategy {
    /// Upload everything (entry document last), then delete keys that are no
    /// longer part of the build. Readers never see an empty bucket.
    #[default]
    UploadThenPrune,
    /// Delete every existing object, then upload the build.
    ClearThenUpload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DeployStep {
    SetPolicy { policy: String },
    Upload(LocalAsset),
    Delete { key: String },
}

impl DeployStep {
    pub fn describe(&self) -> String {
        match self {
            Self::SetPolicy { .. } => "set bucket policy".to_string(),
            Self::Upload(asset) => format!("upload {}", asset.key),
            Self::Delete { key } => format!("delete {key}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployPlan {
    pub bucket: String,
    pub strategy: DeployStrategy,
    pub steps: Vec<DeployStep>,
}

impl DeployPlan {
    pub fn build(
        bucket: &str,
        strategy: DeployStrategy,
        entry_document: &str,
        assets: Vec<LocalAsset>,
        existing_keys: Vec<String>,
    ) -> Self {
        let local_keys: BTreeSet<String> = assets.iter().map(|asset| asset.key.clone()).collect();

        let (mut entry, mut uploads): (Vec<_>, Vec<_>) = assets
            .into_iter()
            .partition(|asset| asset.key == entry_document);
        uploads.append(&mut entry);
        let uploads = uploads.into_iter().map(DeployStep::Upload);

        let mut steps = vec![DeployStep::SetPolicy {
            policy: public_read_policy(bucket),
        }];
        match strategy {
            DeployStrategy::UploadThenPrune => {
                steps.extend(uploads);
                steps.extend(
                    existing_keys
                        .into_iter()
                        .filter(|key| !local_keys.contains(key))
                        .map(|key| DeployStep::Delete { key }),
                );
            }
            DeployStrategy::ClearThenUpload => {
                steps.extend(
                    existing_keys
                        .into_iter()
                        .map(|key| DeployStep::Delete { key }),
                );
                steps.extend(uploads);
            }
        }

        Self {
            bucket: bucket.to_string(),
            strategy,
            steps,
        }
    }

    pub fn upload_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, DeployStep::Upload(_)))
            .count()
    }

    pub fn delete_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, DeployStep::Delete { .. }))
            .count()
    }
}
