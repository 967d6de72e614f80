use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::step::Step;

/// Outcome record produced by executing one [`Step`].
///
/// Keeps the two failure channels apart: a step that ran and reported
/// failure has `succeeded() == false` and no `failure_detail`, while a step
/// whose action raised carries the captured error in `failure_detail`.
/// Results are immutable after creation and live until the next run
/// replaces them.
pub struct StepResult<A, E> {
    step: Rc<Step<A, E>>,
    succeeded: bool,
    message: String,
    failure_detail: Option<E>,
    metadata: IndexMap<String, Value>,
}

impl<A, E> StepResult<A, E> {
    /// Result for a step that completed successfully.
    pub fn success(step: Rc<Step<A, E>>, message: impl Into<String>) -> Self {
        Self {
            step,
            succeeded: true,
            message: message.into(),
            failure_detail: None,
            metadata: IndexMap::new(),
        }
    }

    /// Result for a step that ran and reported failure.
    pub fn failure(step: Rc<Step<A, E>>, message: impl Into<String>) -> Self {
        Self {
            step,
            succeeded: false,
            message: message.into(),
            failure_detail: None,
            metadata: IndexMap::new(),
        }
    }

    /// Result for a step whose action raised an error.
    pub fn raised(step: Rc<Step<A, E>>, message: impl Into<String>, error: E) -> Self {
        Self {
            step,
            succeeded: false,
            message: message.into(),
            failure_detail: Some(error),
            metadata: IndexMap::new(),
        }
    }

    /// Attach a piece of step-specific extra data.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// The step this result was produced from.
    #[must_use]
    pub fn step(&self) -> &Step<A, E> {
        &self.step
    }

    /// Whether the step succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Human-readable outcome description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured error, when the step's action raised one.
    #[must_use]
    pub fn failure_detail(&self) -> Option<&E> {
        self.failure_detail.as_ref()
    }

    /// Step-specific extra data, in insertion order.
    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, Value> {
        &self.metadata
    }
}

impl<A, E: fmt::Debug> fmt::Debug for StepResult<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepResult")
            .field("step", &self.step)
            .field("succeeded", &self.succeeded)
            .field("message", &self.message)
            .field("failure_detail", &self.failure_detail)
            .field("metadata", &self.metadata)
            .finish()
    }
}
