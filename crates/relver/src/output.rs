use console::style;
use relver_process::Reporter;

/// Styles messages by level for terminal output.
///
/// Everything goes to stderr so stdout stays clean for composition;
/// `console` drops the colors automatically when stderr is not a terminal.
pub(crate) struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        eprintln!("{}", style(message).blue());
    }

    fn success(&self, message: &str) {
        eprintln!("{}", style(message).green());
    }

    fn warning(&self, message: &str) {
        eprintln!("{}", style(message).yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", style(message).red());
    }
}
