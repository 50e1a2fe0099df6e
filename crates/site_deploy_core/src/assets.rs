use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::content_type::{cache_control_for, content_type_for};
use crate::error::DeployError;

/// A file from the build output together with the object it becomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalAsset {
    pub path: PathBuf,
    pub key: String,
    pub content_type: &'static str,
    pub cache_control: &'static str,
}

/// Object key for `path`: its location relative to `root`, `/`-separated
/// regardless of platform. `None` when `path` is not inside `root`.
pub fn object_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    (!segments.is_empty()).then(|| segments.join("/"))
}

/// Walks `root` recursively and describes every file found, sorted by key.
pub fn collect_assets(root: &Path, entry_document: &str) -> Result<Vec<LocalAsset>, DeployError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        _ => {
            return Err(DeployError::MissingBuildOutput {
                path: root.to_path_buf(),
            })
        }
    }

    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|error| DeployError::io(&dir, error))?;
        for entry in entries {
            let path = entry.map_err(|error| DeployError::io(&dir, error))?.path();
            let metadata = fs::metadata(&path).map_err(|error| DeployError::io(&path, error))?;
            if metadata.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }

    let mut assets: Vec<LocalAsset> = files
        .into_iter()
        .filter_map(|path| {
            let key = object_key(root, &path)?;
            Some(LocalAsset {
                content_type: content_type_for(&path),
                cache_control: cache_control_for(&key, entry_document),
                key,
                path,
            })
        })
        .collect();
    assets.sort_by(|a, b| a.key.cmp(&b.key));

    tracing::debug!(root = %root.display(), files = assets.len(), "collected build output");
    Ok(assets)
}
