use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use relver_git::GitError;
use relver_manifest::ManifestError;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{GitProvider, ManifestStore, ToolRunner};

/// In-memory manifest double.
///
/// `version` is the token value; `None` plays the role of a manifest whose
/// text holds no readable token.
pub struct MockManifestStore {
    path: PathBuf,
    exists: bool,
    version: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_writes: bool,
}

impl MockManifestStore {
    #[must_use]
    pub fn with_version(version: &str) -> Self {
        Self {
            path: PathBuf::from("/mock/Cargo.toml"),
            exists: true,
            version: RefCell::new(Some(version.to_string())),
            writes: Cell::new(0),
            fail_writes: false,
        }
    }

    #[must_use]
    pub fn without_token() -> Self {
        Self {
            path: PathBuf::from("/mock/Cargo.toml"),
            exists: true,
            version: RefCell::new(None),
            writes: Cell::new(0),
            fail_writes: false,
        }
    }

    #[must_use]
    pub fn missing() -> Self {
        Self {
            path: PathBuf::from("/mock/Cargo.toml"),
            exists: false,
            version: RefCell::new(None),
            writes: Cell::new(0),
            fail_writes: false,
        }
    }

    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_version(&self, version: &str) {
        *self.version.borrow_mut() = Some(version.to_string());
    }

    #[must_use]
    pub fn version(&self) -> Option<String> {
        self.version.borrow().clone()
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ManifestStore for MockManifestStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.exists
    }

    fn read_version(&self) -> Result<String> {
        self.version
            .borrow()
            .clone()
            .ok_or_else(|| token_not_found(&self.path))
    }

    fn write_version(&self, version: &str) -> Result<()> {
        if self.fail_writes {
            return Err(OperationError::Manifest(ManifestError::Write {
                path: self.path.clone(),
                source: std::io::Error::other("disk unplugged"),
            }));
        }
        if self.version.borrow().is_none() {
            return Err(token_not_found(&self.path));
        }
        *self.version.borrow_mut() = Some(version.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

fn token_not_found(path: &Path) -> OperationError {
    OperationError::Manifest(ManifestError::TokenNotFound {
        path: path.to_path_buf(),
    })
}

/// Recording git double; every operation appends to the call log.
pub struct MockGitProvider {
    calls: RefCell<Vec<String>>,
    fail_on: Option<&'static str>,
    inside_work_tree: bool,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
            inside_work_tree: true,
        }
    }

    /// Make the named operation raise a command failure.
    #[must_use]
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    #[must_use]
    pub fn outside_work_tree(mut self) -> Self {
        self.inside_work_tree = false;
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &'static str, detail: Option<String>) -> Result<()> {
        let entry = match detail {
            Some(detail) => format!("{operation} {detail}"),
            None => operation.to_string(),
        };
        self.calls.borrow_mut().push(entry);

        if self.fail_on == Some(operation) {
            return Err(OperationError::Git(GitError::Command {
                command: operation.to_string(),
                stderr: format!("{operation} rejected"),
            }));
        }
        Ok(())
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn is_inside_work_tree(&self) -> Result<bool> {
        self.record("is_inside_work_tree", None)?;
        Ok(self.inside_work_tree)
    }

    fn stage(&self, _path: &Path) -> Result<()> {
        self.record("stage", None)
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record("commit", Some(message.to_string()))
    }

    fn push(&self) -> Result<()> {
        self.record("push", None)
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        self.record("create_tag", Some(format!("{name} {message}")))
    }

    fn push_tag(&self, name: &str) -> Result<()> {
        self.record("push_tag", Some(name.to_string()))
    }

    fn reset_to_parent(&self) -> Result<()> {
        self.record("reset_to_parent", None)
    }

    fn force_push(&self) -> Result<()> {
        self.record("force_push", None)
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.record("delete_tag", Some(name.to_string()))
    }

    fn delete_remote_tag(&self, name: &str) -> Result<()> {
        self.record("delete_remote_tag", Some(name.to_string()))
    }
}

/// Scripted tool runner; pops outcomes front to back.
pub struct MockToolRunner {
    outcomes: RefCell<Vec<Result<bool>>>,
    invocations: RefCell<Vec<String>>,
}

impl MockToolRunner {
    #[must_use]
    pub fn with_outcomes(outcomes: Vec<Result<bool>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes),
            invocations: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }
}

impl ToolRunner for MockToolRunner {
    fn run_tool(&self, args: &[&str]) -> Result<bool> {
        self.invocations.borrow_mut().push(args.join(" "));
        if self.outcomes.borrow().is_empty() {
            return Ok(true);
        }
        self.outcomes.borrow_mut().remove(0)
    }
}
