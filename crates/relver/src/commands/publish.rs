use std::path::Path;
use std::rc::Rc;

use relver_operations::{FsManifestStore, GitCliProvider, ReleaseArgs, ReleaseProcess};
use relver_process::ProcessRunner;

use super::PublishArgs;
use crate::error::{CliError, Result};
use crate::output::ConsoleReporter;

pub(crate) fn run(args: &PublishArgs, root: &Path) -> Result<()> {
    let manifest = Rc::new(FsManifestStore::new(root.join(&args.manifest)));
    let git = Rc::new(GitCliProvider::new(root));
    let process = ReleaseProcess::new(manifest, git)?;

    let mut runner = ProcessRunner::new(process, ConsoleReporter);
    let release = ReleaseArgs {
        version: args.version.clone(),
    };

    if runner.run(&release) {
        Ok(())
    } else {
        Err(CliError::ReleaseFailed)
    }
}
