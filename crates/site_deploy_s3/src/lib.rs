//! AWS adapter and entry point for publishing the web app.
//!
//! Deploy ordering, headers and keys live in `site_deploy_core`; this crate
//! only provides the S3-backed [`BucketStore`](site_deploy_core::BucketStore),
//! command-line configuration and logging setup.

pub mod config;
pub mod logging;
pub mod s3_store;
