use std::fmt;

/// Outcome of a forward or compensating action.
///
/// `Ok(true)` means the action succeeded. `Ok(false)` is a *reported*
/// failure: the action ran to completion and decided the work could not be
/// done. `Err` is a *raised* failure from a collaborator. The two channels
/// stay distinct all the way into [`StepResult`](crate::StepResult).
pub type ActionResult<E> = Result<bool, E>;

/// A boxed action, invoked with the arguments the process was run with.
pub type Action<A, E> = Box<dyn Fn(&A) -> ActionResult<E>>;

/// One unit of work in a process.
///
/// A step is plain data: a label for reporting, a forward action, and an
/// optional compensating action with the same call signature. A step with
/// no compensation is non-reversible and is silently skipped during
/// rollback. Steps are built once, at process-definition time, and never
/// change afterwards.
pub struct Step<A, E> {
    label: String,
    action: Action<A, E>,
    compensation: Option<Action<A, E>>,
}

impl<A, E> Step<A, E> {
    /// Create a step with a forward action and no compensation.
    #[must_use]
    pub fn new<F>(label: impl Into<String>, action: F) -> Self
    where
        F: Fn(&A) -> ActionResult<E> + 'static,
    {
        Self {
            label: label.into(),
            action: Box::new(action),
            compensation: None,
        }
    }

    /// Attach a compensating action that undoes the forward action.
    #[must_use]
    pub fn with_compensation<F>(mut self, compensation: F) -> Self
    where
        F: Fn(&A) -> ActionResult<E> + 'static,
    {
        self.compensation = Some(Box::new(compensation));
        self
    }

    /// A synthetic step whose action always succeeds.
    ///
    /// Used for pseudo-steps that only exist to carry a result, such as the
    /// default input validation.
    #[must_use]
    pub fn always(label: impl Into<String>) -> Self {
        Self::new(label, |_| Ok(true))
    }

    /// Descriptive label, used only for reporting.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the forward action.
    ///
    /// # Errors
    ///
    /// Propagates whatever the action raises.
    pub fn invoke(&self, args: &A) -> ActionResult<E> {
        (self.action)(args)
    }

    /// The compensating action, if this step is reversible.
    #[must_use]
    pub fn compensation(&self) -> Option<&Action<A, E>> {
        self.compensation.as_ref()
    }

    /// Whether this step can be undone.
    #[must_use]
    pub fn is_compensable(&self) -> bool {
        self.compensation.is_some()
    }
}

impl<A, E> fmt::Debug for Step<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("label", &self.label)
            .field("compensable", &self.is_compensable())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct TestError(String);

    #[test]
    fn new_step_has_no_compensation() {
        let step: Step<(), TestError> = Step::new("work", |_| Ok(true));

        assert!(!step.is_compensable());
        assert!(step.compensation().is_none());
        assert_eq!(step.label(), "work");
    }

    #[test]
    fn with_compensation_marks_step_reversible() {
        let step: Step<(), TestError> =
            Step::new("work", |_| Ok(true)).with_compensation(|_| Ok(true));

        assert!(step.is_compensable());
    }

    #[test]
    fn invoke_passes_args_through() -> anyhow::Result<()> {
        let step: Step<i32, TestError> = Step::new("check", |n| Ok(*n > 10));

        assert!(step.invoke(&42)?);
        assert!(!step.invoke(&3)?);
        Ok(())
    }

    #[test]
    fn always_step_succeeds_for_any_args() -> anyhow::Result<()> {
        let step: Step<String, TestError> = Step::always("validation");

        assert!(step.invoke(&String::from("anything"))?);
        Ok(())
    }

    #[test]
    fn debug_output_shows_label_and_compensability() {
        let step: Step<(), TestError> = Step::always("noop");

        let rendered = format!("{step:?}");

        assert!(rendered.contains("noop"));
        assert!(rendered.contains("compensable"));
    }
}
