use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use site_deploy_core::{DeployOptions, DeployStrategy, DEFAULT_ENTRY_DOCUMENT};

pub const DEFAULT_DIST_PATH: &str = "packages/web/dist";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "deploy_web",
    about = "Publish the built web app to its S3 bucket",
    long_about = "Sets a public-read bucket policy, uploads every file of the build\n\
                  output with its content type and cache headers, and removes objects\n\
                  that are no longer part of the build."
)]
pub struct DeployConfig {
    /// Target bucket
    #[arg(long, env = "BUCKET_NAME")]
    pub bucket: String,
    /// Directory holding the built web app
    #[arg(long, env = "DIST_PATH", default_value = DEFAULT_DIST_PATH)]
    pub dist: PathBuf,
    /// AWS region of the bucket
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,
    /// Object served at the site root; uploaded with `no-cache`
    #[arg(long, default_value = DEFAULT_ENTRY_DOCUMENT)]
    pub entry_document: String,
    /// Ordering of uploads and deletes
    #[arg(value_enum, long, default_value_t = StrategyArg::UploadThenPrune)]
    pub strategy: StrategyArg,
    /// Print the plan for an empty bucket without calling AWS
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Upload the build, then delete stale objects
    UploadThenPrune,
    /// Delete every object, then upload the build
    ClearThenUpload,
}

impl From<StrategyArg> for DeployStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::UploadThenPrune => Self::UploadThenPrune,
            StrategyArg::ClearThenUpload => Self::ClearThenUpload,
        }
    }
}

impl DeployConfig {
    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions {
            dist_dir: self.dist.clone(),
            bucket: self.bucket.clone(),
            entry_document: self.entry_document.clone(),
            strategy: self.strategy.into(),
        }
    }

    pub fn website_url(&self) -> String {
        website_url(&self.bucket, &self.region)
    }

    pub fn console_url(&self) -> String {
        console_url(&self.bucket)
    }
}

pub fn website_url(bucket: &str, region: &str) -> String {
    format!("https://{bucket}.s3-website.{region}.amazonaws.com")
}

pub fn console_url(bucket: &str) -> String {
    format!("https://console.aws.amazon.com/s3/buckets/{bucket}")
}
