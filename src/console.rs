//! Console output sink

/// Line-oriented sink for human-readable terminal output
pub trait ConsoleWriter: Send + Sync {
    /// Write `text` followed by a newline to the console
    fn write_line(&self, text: &str);
}

/// Console writer backed by standard output
///
/// Write errors behave like any `println!`: they panic and propagate to the
/// caller rather than being caught here.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleWriter for StdoutConsole {
    fn write_line(&self, text: &str) {
        println!("{}", text);
    }
}
