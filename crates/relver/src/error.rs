use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Operation(#[from] relver_operations::OperationError),

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("interactive mode requires a terminal")]
    NotATty,

    #[error("not a git repository: '{}'", .0.display())]
    NotAGitRepository(PathBuf),

    #[error("release did not complete")]
    ReleaseFailed,

    #[error("project checks failed")]
    CheckFailed,

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, CliError>;
