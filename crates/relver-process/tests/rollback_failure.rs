//! Integration tests for best-effort rollback when compensations fail.

use std::cell::RefCell;
use std::rc::Rc;

use relver_process::{NullReporter, Process, ProcessRunner, Reporter, Step};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct TestError(String);

type Log = Rc<RefCell<Vec<String>>>;

enum UndoBehavior {
    Succeeds,
    Reports,
    Raises,
}

fn step_with_undo(name: &'static str, log: &Log, undo: UndoBehavior) -> Step<(), TestError> {
    let undo_log = Rc::clone(log);

    Step::new(name, |_| Ok(true)).with_compensation(move |_| {
        undo_log.borrow_mut().push(format!("undo {name}"));
        match undo {
            UndoBehavior::Succeeds => Ok(true),
            UndoBehavior::Reports => Ok(false),
            UndoBehavior::Raises => Err(TestError(format!("cannot undo {name}"))),
        }
    })
}

struct BrittleUndoProcess {
    log: Log,
}

impl Process for BrittleUndoProcess {
    type Args = ();
    type Error = TestError;

    fn steps(&self) -> Vec<Step<(), TestError>> {
        vec![
            step_with_undo("first", &self.log, UndoBehavior::Succeeds),
            step_with_undo("second", &self.log, UndoBehavior::Succeeds),
            step_with_undo("third", &self.log, UndoBehavior::Raises),
            Step::new("fourth", |_| Ok(false)),
        ]
    }
}

#[test]
fn raising_compensation_does_not_stop_earlier_compensations() {
    let log: Log = Rc::default();
    let mut runner = ProcessRunner::new(
        BrittleUndoProcess {
            log: Rc::clone(&log),
        },
        NullReporter,
    );

    assert!(!runner.run(&()));

    // Step three's undo raises, yet steps two and one are still undone.
    assert_eq!(
        *log.borrow(),
        vec!["undo third", "undo second", "undo first"]
    );
}

struct ReportedUndoFailure {
    log: Log,
}

impl Process for ReportedUndoFailure {
    type Args = ();
    type Error = TestError;

    fn steps(&self) -> Vec<Step<(), TestError>> {
        vec![
            step_with_undo("first", &self.log, UndoBehavior::Reports),
            Step::new("second", |_| {
                Err(TestError(String::from("forward failure")))
            }),
        ]
    }
}

#[test]
fn reported_compensation_failure_is_surfaced_to_the_sink() {
    struct CollectingReporter {
        errors: RefCell<Vec<String>>,
        warnings: RefCell<Vec<String>>,
    }

    impl Reporter for &CollectingReporter {
        fn info(&self, _message: &str) {}
        fn success(&self, _message: &str) {}
        fn warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    let log: Log = Rc::default();
    let reporter = CollectingReporter {
        errors: RefCell::new(Vec::new()),
        warnings: RefCell::new(Vec::new()),
    };
    let mut runner = ProcessRunner::new(
        ReportedUndoFailure {
            log: Rc::clone(&log),
        },
        &reporter,
    );

    assert!(!runner.run(&()));

    assert_eq!(*log.borrow(), vec!["undo first"]);
    assert!(
        reporter
            .errors
            .borrow()
            .iter()
            .any(|m| m == "Rollback failed")
    );
    // The rollback pass still opens and closes normally.
    let warnings = reporter.warnings.borrow();
    assert_eq!(warnings.first().map(String::as_str), Some("Rolling back previous steps..."));
    assert_eq!(warnings.last().map(String::as_str), Some("Rollback completed"));
}

#[test]
fn raising_compensation_error_is_reported_with_the_step_label() {
    struct CollectingReporter {
        errors: RefCell<Vec<String>>,
    }

    impl Reporter for &CollectingReporter {
        fn info(&self, _message: &str) {}
        fn success(&self, _message: &str) {}
        fn warning(&self, _message: &str) {}
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    let log: Log = Rc::default();
    let reporter = CollectingReporter {
        errors: RefCell::new(Vec::new()),
    };
    let mut runner = ProcessRunner::new(
        BrittleUndoProcess {
            log: Rc::clone(&log),
        },
        &reporter,
    );

    assert!(!runner.run(&()));

    assert!(reporter.errors.borrow().iter().any(|m| {
        m.contains("Error during rollback of 'third'") && m.contains("cannot undo third")
    }));
}
