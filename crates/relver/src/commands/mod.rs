mod check;
mod init;
mod publish;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Update the manifest version, then commit, push, and tag the release
    Publish(PublishArgs),
    /// Run project lints and the test suite
    Check,
    /// Interactively collect release settings for a project
    Init,
}

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Version number in '{MAJOR}.{MINOR}.{PATCH}' format
    #[arg(long)]
    pub(crate) version: String,

    /// Manifest file holding the version token, relative to the project root
    #[arg(long, default_value = "Cargo.toml")]
    pub(crate) manifest: PathBuf,
}

impl Commands {
    pub(crate) fn execute(self, root: &Path) -> Result<()> {
        match self {
            Self::Publish(args) => publish::run(&args, root),
            Self::Check => check::run(root),
            Self::Init => init::run(root),
        }
    }
}
