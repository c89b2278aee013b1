//! fwlog - Logging helper for the fwutil firmware management CLI
//!
//! Formats and emits firmware action lifecycle messages (download, install,
//! update) to a syslog-style sink, and prefixed status lines to the console.

pub mod action;
pub mod console;
pub mod errors;
pub mod logs;
pub mod syslog;

pub use action::{Action, FirmwareActionLogger, LogEvent, Outcome};
pub use console::{ConsoleWriter, StdoutConsole};
pub use errors::FwLogError;
pub use logs::{init_logging, LogLevel, LogOptions};
pub use syslog::{SystemLogger, SyslogSink, SYSLOG_IDENTIFIER};
