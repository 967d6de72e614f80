use std::path::Path;
use std::rc::Rc;

use relver_operations::{CargoCli, CheckProcess};
use relver_process::ProcessRunner;

use crate::error::{CliError, Result};
use crate::output::ConsoleReporter;

pub(crate) fn run(root: &Path) -> Result<()> {
    let cargo = Rc::new(CargoCli::new(root));
    let mut runner = ProcessRunner::new(CheckProcess::new(cargo), ConsoleReporter);

    if runner.run(&()) {
        Ok(())
    } else {
        Err(CliError::CheckFailed)
    }
}
