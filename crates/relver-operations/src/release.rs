use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use relver_manifest::ManifestError;
use relver_process::{Process, Step, StepResult};
use serde_json::Value;
use tracing::debug;

use crate::error::OperationError;
use crate::traits::{GitProvider, ManifestStore};

static VERSION_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("version format pattern is valid"));

/// Run-time arguments for one release.
#[derive(Debug, Clone)]
pub struct ReleaseArgs {
    pub version: String,
}

/// The version-release process: update the manifest version token, commit
/// and push the change, then create and push an annotated release tag.
///
/// Each step pairs the forward action with a compensating one, so a failure
/// midway leaves the project as it was, best-effort. The manifest's current
/// version is captured once at construction; if it cannot be read the
/// update step still runs, but its rollback degrades to a reported no-op.
pub struct ReleaseProcess {
    manifest: Rc<dyn ManifestStore>,
    git: Rc<dyn GitProvider>,
    original_version: Option<String>,
}

impl std::fmt::Debug for ReleaseProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseProcess")
            .field("original_version", &self.original_version)
            .finish_non_exhaustive()
    }
}

impl ReleaseProcess {
    /// # Errors
    ///
    /// Returns `OperationError::ManifestMissing` when the manifest file
    /// does not exist. This is the only error a release surfaces before a
    /// run starts; everything later is recorded in step results.
    pub fn new(
        manifest: Rc<dyn ManifestStore>,
        git: Rc<dyn GitProvider>,
    ) -> crate::Result<Self> {
        if !manifest.exists() {
            return Err(OperationError::ManifestMissing {
                path: manifest.path().to_path_buf(),
            });
        }

        let original_version = manifest.read_version().ok();

        Ok(Self {
            manifest,
            git,
            original_version,
        })
    }

    /// The version captured from the manifest at construction time.
    #[must_use]
    pub fn original_version(&self) -> Option<&str> {
        self.original_version.as_deref()
    }

    fn update_version_step(&self) -> Step<ReleaseArgs, OperationError> {
        let manifest = Rc::clone(&self.manifest);
        let restore = Rc::clone(&self.manifest);
        let original = self.original_version.clone();

        Step::new("update manifest version", move |args: &ReleaseArgs| {
            match manifest.write_version(&args.version) {
                Ok(()) => Ok(true),
                Err(OperationError::Manifest(ManifestError::TokenNotFound { .. })) => Ok(false),
                Err(err) => Err(err),
            }
        })
        .with_compensation(move |_args: &ReleaseArgs| {
            let Some(version) = original.as_deref() else {
                // Nothing was captured at construction, so there is nothing
                // to restore; reported as a failed rollback, not a raise.
                return Ok(false);
            };
            restore.write_version(version)?;
            Ok(true)
        })
    }

    fn commit_step(&self) -> Step<ReleaseArgs, OperationError> {
        let git = Rc::clone(&self.git);
        let undo_git = Rc::clone(&self.git);
        let manifest_path = self.manifest.path().to_path_buf();

        Step::new("commit and push version change", move |args: &ReleaseArgs| {
            if !git.is_inside_work_tree()? {
                return Ok(false);
            }
            git.stage(&manifest_path)?;
            git.commit(&format!("Bump version to v{}", args.version))?;
            git.push()?;
            Ok(true)
        })
        .with_compensation(move |_args: &ReleaseArgs| {
            // The forced push can clobber remote history that moved since
            // the original push; a rejected push surfaces as a reported
            // rollback failure and the remaining compensations still run.
            undo_git.reset_to_parent()?;
            undo_git.force_push()?;
            Ok(true)
        })
    }

    fn tag_step(&self) -> Step<ReleaseArgs, OperationError> {
        let git = Rc::clone(&self.git);
        let undo_git = Rc::clone(&self.git);

        Step::new("create and push release tag", move |args: &ReleaseArgs| {
            let tag = format!("v{}", args.version);
            git.create_tag(&tag, &format!("Release version {}", args.version))?;
            git.push_tag(&tag)?;
            Ok(true)
        })
        .with_compensation(move |args: &ReleaseArgs| {
            let tag = format!("v{}", args.version);
            undo_git.delete_tag(&tag)?;
            undo_git.delete_remote_tag(&tag)?;
            Ok(true)
        })
    }
}

impl Process for ReleaseProcess {
    type Args = ReleaseArgs;
    type Error = OperationError;

    fn steps(&self) -> Vec<Step<ReleaseArgs, OperationError>> {
        vec![
            self.update_version_step(),
            self.commit_step(),
            self.tag_step(),
        ]
    }

    fn validate(&self, args: &ReleaseArgs) -> StepResult<ReleaseArgs, OperationError> {
        let step = Rc::new(Step::always("validate version format"));

        if VERSION_FORMAT.is_match(&args.version) {
            debug!(version = %args.version, "release input accepted");
            StepResult::success(step, format!("version {} is well-formed", args.version))
                .with_metadata("version", Value::String(args.version.clone()))
        } else {
            StepResult::failure(
                step,
                format!(
                    "invalid version format '{}', expected MAJOR.MINOR.PATCH",
                    args.version
                ),
            )
            .with_metadata("version", Value::String(args.version.clone()))
        }
    }
}
