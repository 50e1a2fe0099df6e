use std::process::ExitCode;

use clap::Parser;
use site_deploy_core::{deploy, plan_deploy, MemoryBucket};
use site_deploy_s3::config::DeployConfig;
use site_deploy_s3::logging::init_logging;
use site_deploy_s3::s3_store::S3BucketStore;
use tracing::{error, info};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

async fn run(config: DeployConfig) -> Result<(), BoxError> {
    let options = config.deploy_options();

    if config.dry_run {
        let plan = plan_deploy(&MemoryBucket::new(), &options)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    info!(
        source = %options.dist_dir.display(),
        bucket = %options.bucket,
        region = %config.region,
        "deploying web app"
    );
    let store = S3BucketStore::connect(&config.bucket, &config.region).await;
    let report = deploy(&store, &options)?;

    println!(
        "Deployed {} files to {} ({} stale objects removed)",
        report.uploaded, report.bucket, report.deleted
    );
    println!("Site: {}", config.website_url());
    println!("Console: {}", config.console_url());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let config = DeployConfig::parse();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("deployment failed: {err}");
            ExitCode::FAILURE
        }
    }
}
