use std::rc::Rc;

use crate::result::StepResult;
use crate::step::Step;

/// A concrete multi-step process definition.
///
/// Implementers supply *what* the steps do; [`ProcessRunner`] supplies how
/// the sequence, validation, and rollback are orchestrated. Both methods
/// must be deterministic and free of side effects — the runner calls each
/// once per run, before any step action executes.
///
/// [`ProcessRunner`]: crate::ProcessRunner
pub trait Process {
    /// Run-time arguments every action and compensation is invoked with.
    type Args;

    /// Error type raised by this process's actions.
    type Error;

    /// The ordered step list. Defaults to no steps.
    fn steps(&self) -> Vec<Step<Self::Args, Self::Error>> {
        Vec::new()
    }

    /// Check the run arguments before any step executes.
    ///
    /// The default accepts everything, wrapping a synthetic always-true
    /// step so the result slots into the run history like any other.
    fn validate(&self, args: &Self::Args) -> StepResult<Self::Args, Self::Error> {
        let _ = args;
        StepResult::success(
            Rc::new(Step::always("input validation")),
            "input validation passed",
        )
    }
}
