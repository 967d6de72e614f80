use std::path::Path;

use console::style;

use crate::error::{CliError, Result};
use crate::interaction;

const PROJECT_KINDS: [&str; 2] = ["application", "library"];

pub(crate) fn run(root: &Path) -> Result<()> {
    if !root.join(".git").exists() {
        return Err(CliError::NotAGitRepository(root.to_path_buf()));
    }

    interaction::ensure_interactive()?;

    let name = interaction::text("Project name")?;
    let Some(kind_index) = interaction::select("Project kind", &PROJECT_KINDS)? else {
        return Err(CliError::Cancelled);
    };
    let description = interaction::optional_text("Short description")?;

    let kind = PROJECT_KINDS[kind_index];
    println!("Collected release settings for '{name}' ({kind}): {description}");
    println!(
        "{}",
        style("Publish a version with 'relver publish --version <MAJOR.MINOR.PATCH>'").dim()
    );
    Ok(())
}
