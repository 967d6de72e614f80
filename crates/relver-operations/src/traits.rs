use std::path::Path;

use crate::Result;

/// Access to the project manifest's version token.
pub trait ManifestStore {
    /// Location of the manifest file.
    fn path(&self) -> &Path;

    /// Whether the manifest file exists.
    fn exists(&self) -> bool;

    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or holds no version
    /// token.
    fn read_version(&self) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written, or holds
    /// no version token to replace.
    fn write_version(&self, version: &str) -> Result<()>;
}

/// The version-control operations the release process needs.
pub trait GitProvider {
    /// # Errors
    ///
    /// Returns an error if the git binary cannot be spawned.
    fn is_inside_work_tree(&self) -> Result<bool>;

    /// # Errors
    ///
    /// Returns an error if staging the file fails.
    fn stage(&self, path: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, message: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the push is rejected or fails.
    fn push(&self) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the tag cannot be created or already exists.
    fn create_tag(&self, name: &str, message: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if pushing the tag fails.
    fn push_tag(&self, name: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the last commit cannot be discarded.
    fn reset_to_parent(&self) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the forced push is rejected or fails.
    fn force_push(&self) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the local tag does not exist.
    fn delete_tag(&self, name: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if deleting the remote tag fails.
    fn delete_remote_tag(&self, name: &str) -> Result<()>;
}

/// Runs a project tool, reporting whether it exited cleanly.
pub trait ToolRunner {
    /// # Errors
    ///
    /// Returns an error only when the tool cannot be spawned; a non-zero
    /// exit is an `Ok(false)`.
    fn run_tool(&self, args: &[&str]) -> Result<bool>;
}
