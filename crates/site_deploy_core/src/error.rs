use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("build output not found at {}; build the web app first", path.display())]
    MissingBuildOutput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} failed: {message}")]
    Store { step: String, message: String },
}

impl DeployError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn store(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            step: step.into(),
            message: message.into(),
        }
    }
}
