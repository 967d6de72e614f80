//! Multi-step process execution with rollback on failure.
//!
//! This crate provides infrastructure for running a named, ordered sequence
//! of fallible steps as one logical transaction. Each step pairs a forward
//! action with an optional compensating action; when a step fails, the
//! compensations of all previously successful steps run in reverse order.

mod process;
mod report;
mod result;
mod runner;
mod step;

pub use process::Process;
pub use report::{NullReporter, Reporter};
pub use result::StepResult;
pub use runner::ProcessRunner;
pub use step::{Action, ActionResult, Step};
