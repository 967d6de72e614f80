use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::process::Process;
use crate::report::Reporter;
use crate::result::StepResult;
use crate::step::Step;

/// Executes a [`Process`] as one logical transaction.
///
/// The runner owns the run lifecycle: it validates input, executes the
/// step list in order, records a [`StepResult`] per attempt, and on the
/// first failure rolls back every previously successful step in reverse
/// order, best-effort. Step errors are captured into results, never
/// propagated to the caller; the boolean returned by [`run`] is the sole
/// machine-readable outcome.
///
/// A runner executes one run at a time. It keeps no state across runs
/// beyond the result history of the most recent one.
///
/// [`run`]: ProcessRunner::run
pub struct ProcessRunner<P: Process, R> {
    process: P,
    reporter: R,
    results: Vec<StepResult<P::Args, P::Error>>,
}

impl<P, R> ProcessRunner<P, R>
where
    P: Process,
    P::Error: fmt::Display,
    R: Reporter,
{
    #[must_use]
    pub fn new(process: P, reporter: R) -> Self {
        Self {
            process,
            reporter,
            results: Vec::new(),
        }
    }

    /// Run the complete process: validation, every step in order, and
    /// rollback on the first failure.
    ///
    /// Returns `true` only when validation and every step succeeded.
    pub fn run(&mut self, args: &P::Args) -> bool {
        self.results.clear();

        let validation = self.process.validate(args);
        let passed = validation.succeeded();
        let message = validation.message().to_string();
        self.results.push(validation);

        if !passed {
            self.reporter.error(&format!("Validation failed: {message}"));
            return false;
        }

        let steps = self.process.steps();
        debug!(steps = steps.len(), "starting process run");

        let mut completed: Vec<usize> = Vec::new();

        for step in steps {
            let step = Rc::new(step);
            let result = self.execute_step(&step, args);
            let succeeded = result.succeeded();
            self.results.push(result);

            if succeeded {
                completed.push(self.results.len() - 1);
                continue;
            }

            // A failed step is never rolled back; only the steps that
            // succeeded before it are. When none of them is reversible the
            // rollback pass would be a no-op, so it is skipped entirely.
            if completed
                .iter()
                .any(|&i| self.results[i].step().is_compensable())
            {
                let completed_results: Vec<&StepResult<P::Args, P::Error>> =
                    completed.iter().map(|&i| &self.results[i]).collect();
                self.rollback(&completed_results, args);
            }
            return false;
        }

        self.reporter.success("✓ Process completed successfully");
        true
    }

    /// The full result history of the last run, validation included.
    ///
    /// Valid until the next call to [`run`](ProcessRunner::run) replaces it.
    #[must_use]
    pub fn results(&self) -> &[StepResult<P::Args, P::Error>] {
        &self.results
    }

    fn execute_step(
        &self,
        step: &Rc<Step<P::Args, P::Error>>,
        args: &P::Args,
    ) -> StepResult<P::Args, P::Error> {
        self.reporter.info(&format!("Step: {}...", step.label()));
        debug!(step = step.label(), "executing");

        match step.invoke(args) {
            Ok(true) => {
                self.reporter
                    .success(&format!("✓ {} successful", step.label()));
                StepResult::success(Rc::clone(step), format!("Step '{}' succeeded", step.label()))
            }
            Ok(false) => {
                self.reporter.error(&format!("✗ {} failed", step.label()));
                StepResult::failure(Rc::clone(step), format!("Step '{}' failed", step.label()))
            }
            Err(error) => {
                let message = format!("Error in step '{}': {error}", step.label());
                self.reporter.error(&message);
                StepResult::raised(Rc::clone(step), message, error)
            }
        }
    }

    /// Undo previously successful steps, most recent first.
    ///
    /// Steps without a compensation are skipped. A compensation that fails
    /// or raises is reported and the loop carries on, so every remaining
    /// reversible step still gets its attempt.
    fn rollback(&self, completed: &[&StepResult<P::Args, P::Error>], args: &P::Args) {
        self.reporter.warning("Rolling back previous steps...");

        for result in completed.iter().rev() {
            let step = result.step();
            let Some(compensation) = step.compensation() else {
                continue;
            };

            self.reporter
                .warning(&format!("Rolling back: {}...", step.label()));
            debug!(step = step.label(), "compensating");

            match compensation(args) {
                Ok(true) => self.reporter.success("Rollback successful"),
                Ok(false) => self.reporter.error("Rollback failed"),
                Err(error) => self.reporter.error(&format!(
                    "Error during rollback of '{}': {error}",
                    step.label()
                )),
            }
        }

        self.reporter.warning("Rollback completed");
    }
}
