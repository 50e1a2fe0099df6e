//! Static site deploy primitives.
//!
//! This crate owns the deterministic side of publishing a built web app to an
//! object-storage bucket: which files go where, with which headers, and in
//! which order. It intentionally excludes AWS SDK concerns; storage is reached
//! through the [`store::BucketStore`] seam.

pub mod assets;
pub mod content_type;
pub mod error;
pub mod executor;
pub mod plan;
pub mod policy;
pub mod store;

pub use assets::{collect_assets, object_key, LocalAsset};
pub use content_type::{cache_control_for, content_type_for, DEFAULT_ENTRY_DOCUMENT};
pub use error::DeployError;
pub use executor::{deploy, execute_plan, plan_deploy, DeployOptions, DeployReport};
pub use plan::{DeployPlan, DeployStep, DeployStrategy};
pub use policy::public_read_policy;
pub use store::{BucketEvent, BucketStore, MemoryBucket, PutObject};
