use std::io::IsTerminal;

use dialoguer::{Input, Select};

use crate::error::{CliError, Result};

pub(crate) fn ensure_interactive() -> Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(CliError::NotATty)
    }
}

pub(crate) fn text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(from_dialoguer)
}

pub(crate) fn optional_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(from_dialoguer)
}

/// Returns `None` when the user cancels the selection.
pub(crate) fn select(prompt: &str, items: &[&str]) -> Result<Option<usize>> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(from_dialoguer)
}

fn from_dialoguer(e: dialoguer::Error) -> CliError {
    match e {
        dialoguer::Error::IO(io_err) => CliError::Io(io_err),
    }
}
