use std::path::{Path, PathBuf};
use std::process::Command;

use relver_git::GitCli;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{GitProvider, ManifestStore, ToolRunner};

/// Manifest access backed by the filesystem.
pub struct FsManifestStore {
    path: PathBuf,
}

impl FsManifestStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestStore for FsManifestStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_version(&self) -> Result<String> {
        Ok(relver_manifest::read_version(&self.path)?)
    }

    fn write_version(&self, version: &str) -> Result<()> {
        Ok(relver_manifest::write_version(&self.path, version)?)
    }
}

/// Git operations backed by the `git` binary.
pub struct GitCliProvider {
    git: GitCli,
}

impl GitCliProvider {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            git: GitCli::new(root),
        }
    }
}

impl GitProvider for GitCliProvider {
    fn is_inside_work_tree(&self) -> Result<bool> {
        Ok(self.git.is_inside_work_tree()?)
    }

    fn stage(&self, path: &Path) -> Result<()> {
        Ok(self.git.stage(path)?)
    }

    fn commit(&self, message: &str) -> Result<()> {
        Ok(self.git.commit(message)?)
    }

    fn push(&self) -> Result<()> {
        Ok(self.git.push()?)
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        Ok(self.git.create_tag(name, message)?)
    }

    fn push_tag(&self, name: &str) -> Result<()> {
        Ok(self.git.push_tag(name)?)
    }

    fn reset_to_parent(&self) -> Result<()> {
        Ok(self.git.reset_to_parent()?)
    }

    fn force_push(&self) -> Result<()> {
        Ok(self.git.force_push()?)
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        Ok(self.git.delete_tag(name)?)
    }

    fn delete_remote_tag(&self, name: &str) -> Result<()> {
        Ok(self.git.delete_remote_tag(name)?)
    }
}

/// Cargo invocations with inherited stdio, so lint and test output reaches
/// the terminal directly.
pub struct CargoCli {
    root: PathBuf,
}

impl CargoCli {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ToolRunner for CargoCli {
    fn run_tool(&self, args: &[&str]) -> Result<bool> {
        let status = Command::new("cargo")
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|source| OperationError::Tool {
                tool: format!("cargo {}", args.join(" ")),
                source,
            })?;

        Ok(status.success())
    }
}
