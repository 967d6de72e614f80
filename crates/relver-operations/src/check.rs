use std::rc::Rc;

use relver_process::{Process, Step};

use crate::error::OperationError;
use crate::traits::ToolRunner;

/// The project-check process: run lints, then the test suite.
///
/// Neither step changes project state, so neither carries a compensation;
/// a failure simply stops the sequence.
pub struct CheckProcess {
    cargo: Rc<dyn ToolRunner>,
}

impl CheckProcess {
    #[must_use]
    pub fn new(cargo: Rc<dyn ToolRunner>) -> Self {
        Self { cargo }
    }
}

impl Process for CheckProcess {
    type Args = ();
    type Error = OperationError;

    fn steps(&self) -> Vec<Step<(), OperationError>> {
        let clippy = Rc::clone(&self.cargo);
        let test = Rc::clone(&self.cargo);

        vec![
            Step::new("run clippy lints", move |_| {
                clippy.run_tool(&["clippy", "--no-deps"])
            }),
            Step::new("run test suite", move |_| test.run_tool(&["test"])),
        ]
    }
}

#[cfg(test)]
mod tests {
    use relver_process::{NullReporter, ProcessRunner};

    use super::*;
    use crate::mocks::MockToolRunner;

    #[test]
    fn runs_clippy_then_tests() {
        let cargo = Rc::new(MockToolRunner::with_outcomes(vec![Ok(true), Ok(true)]));
        let mut runner = ProcessRunner::new(CheckProcess::new(cargo.clone()), NullReporter);

        assert!(runner.run(&()));

        assert_eq!(cargo.invocations(), vec!["clippy --no-deps", "test"]);
        assert_eq!(runner.results().len(), 3);
    }

    #[test]
    fn lint_failure_stops_before_the_test_suite() {
        let cargo = Rc::new(MockToolRunner::with_outcomes(vec![Ok(false)]));
        let mut runner = ProcessRunner::new(CheckProcess::new(cargo.clone()), NullReporter);

        assert!(!runner.run(&()));

        assert_eq!(cargo.invocations(), vec!["clippy --no-deps"]);
        let lint_result = &runner.results()[1];
        assert!(!lint_result.succeeded());
        assert!(lint_result.failure_detail().is_none());
    }

    #[test]
    fn spawn_failure_is_captured_as_a_raised_error() {
        let cargo = Rc::new(MockToolRunner::with_outcomes(vec![Err(
            OperationError::Tool {
                tool: String::from("cargo clippy --no-deps"),
                source: std::io::Error::other("cargo not on PATH"),
            },
        )]));
        let mut runner = ProcessRunner::new(CheckProcess::new(cargo), NullReporter);

        assert!(!runner.run(&()));

        let lint_result = &runner.results()[1];
        assert!(lint_result.failure_detail().is_some());
    }

    #[test]
    fn no_step_in_the_check_process_is_reversible() {
        let process = CheckProcess::new(Rc::new(MockToolRunner::with_outcomes(Vec::new())));

        assert!(process.steps().iter().all(|s| !s.is_compensable()));
    }
}
