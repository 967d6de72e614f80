use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] relver_git::GitError),

    #[error(transparent)]
    Manifest(#[from] relver_manifest::ManifestError),

    #[error("manifest not found at '{path}'")]
    ManifestMissing { path: PathBuf },

    #[error("failed to run '{tool}'")]
    Tool {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;
