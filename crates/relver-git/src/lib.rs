//! Git command invocations for relver.
//!
//! Every operation is a thin shell-out to the `git` binary, run
//! synchronously in the project root with stderr captured for error
//! reporting. Callers treat each operation as an opaque success/failure.

mod cli;
mod error;

pub use cli::GitCli;
pub use error::GitError;

pub type Result<T> = std::result::Result<T, GitError>;
