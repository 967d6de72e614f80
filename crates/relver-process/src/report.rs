/// Sink for human-readable progress and result messages.
///
/// The runner emits a message for every step attempt, success, failure, and
/// rollback action. Implementations decide how a level is rendered; the
/// runner never inspects what the sink does with a message.
pub trait Reporter {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// A reporter that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
