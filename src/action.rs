//! Firmware action lifecycle logging

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::console::{ConsoleWriter, StdoutConsole};
use crate::syslog::{SyslogSink, SystemLogger};

/// Firmware lifecycle action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Fetch a firmware image onto the device
    Download,

    /// Flash a firmware image to a component
    Install,

    /// Install plus any component-specific post-steps
    Update,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Download => "download",
            Action::Install => "install",
            Action::Update => "update",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a firmware action
///
/// A failure optionally carries the error detail that goes into the
/// `exception=` clause of the log line. Failure without detail and failure
/// with detail produce distinct message shapes; downstream log parsers rely
/// on the clause being absent rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Action completed successfully
    Success,

    /// Action failed, with optional error detail
    Failure { detail: Option<String> },
}

impl Outcome {
    /// Failure with no error detail
    pub fn failure() -> Self {
        Outcome::Failure { detail: None }
    }

    /// Failure carrying error detail
    pub fn failure_with(detail: impl Into<String>) -> Self {
        Outcome::Failure {
            detail: Some(detail.into()),
        }
    }

    /// Status label used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure { .. } => "failure",
        }
    }
}

/// One firmware action lifecycle event
///
/// Ephemeral: built, rendered, and forwarded within a single logging call.
/// `outcome` is `None` for a start event and set for an end event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub action: Action,
    pub component: String,
    pub firmware: String,
    pub outcome: Option<Outcome>,
}

impl LogEvent {
    fn start(action: Action, component: &str, firmware: &str) -> Self {
        Self {
            action,
            component: component.to_string(),
            firmware: firmware.to_string(),
            outcome: None,
        }
    }

    fn end(action: Action, component: &str, firmware: &str, outcome: Outcome) -> Self {
        Self {
            action,
            component: component.to_string(),
            firmware: firmware.to_string(),
            outcome: Some(outcome),
        }
    }

    /// Whether this event logs at error level
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Failure { .. }))
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            None => write!(
                f,
                "Firmware {} started: component={}, firmware={}",
                self.action, self.component, self.firmware
            ),
            Some(outcome) => {
                write!(
                    f,
                    "Firmware {} ended: component={}, firmware={}, status={}",
                    self.action,
                    self.component,
                    self.firmware,
                    outcome.as_str()
                )?;
                if let Outcome::Failure {
                    detail: Some(detail),
                } = outcome
                {
                    write!(f, ", exception={}", detail)?;
                }
                Ok(())
            }
        }
    }
}

/// Formats firmware action lifecycle messages and forwards them to the
/// system log, plus prefixed status lines to the console
///
/// Stateless; every call formats one message and performs one sink write.
/// Inputs are passed through verbatim into the message, empty strings
/// included.
pub struct FirmwareActionLogger {
    syslog: Arc<dyn SystemLogger>,
    console: Arc<dyn ConsoleWriter>,
}

impl FirmwareActionLogger {
    pub fn new(syslog: Arc<dyn SystemLogger>, console: Arc<dyn ConsoleWriter>) -> Self {
        Self { syslog, console }
    }

    /// Log the start of a firmware action at info level
    pub fn log_action_start(&self, action: Action, component: &str, firmware: &str) {
        let event = LogEvent::start(action, component, firmware);
        self.syslog.log_info(&event.to_string());
    }

    /// Log the end of a firmware action
    ///
    /// Success logs at info level, failure at error level.
    pub fn log_action_end(
        &self,
        action: Action,
        component: &str,
        firmware: &str,
        outcome: Outcome,
    ) {
        let event = LogEvent::end(action, component, firmware, outcome);
        let text = event.to_string();
        if event.is_error() {
            self.syslog.log_error(&text);
        } else {
            self.syslog.log_info(&text);
        }
    }

    pub fn log_download_start(&self, component: &str, firmware: &str) {
        self.log_action_start(Action::Download, component, firmware);
    }

    pub fn log_download_end(&self, component: &str, firmware: &str, outcome: Outcome) {
        self.log_action_end(Action::Download, component, firmware, outcome);
    }

    pub fn log_install_start(&self, component: &str, firmware: &str) {
        self.log_action_start(Action::Install, component, firmware);
    }

    pub fn log_install_end(&self, component: &str, firmware: &str, outcome: Outcome) {
        self.log_action_end(Action::Install, component, firmware, outcome);
    }

    pub fn log_update_start(&self, component: &str, firmware: &str) {
        self.log_action_start(Action::Update, component, firmware);
    }

    pub fn log_update_end(&self, component: &str, firmware: &str, outcome: Outcome) {
        self.log_action_end(Action::Update, component, firmware, outcome);
    }

    /// Write `Error: <msg>.` to the console
    pub fn print_error(&self, msg: &str) {
        self.console.write_line(&format!("Error: {}.", msg));
    }

    /// Write `Warning: <msg>.` to the console
    pub fn print_warning(&self, msg: &str) {
        self.console.write_line(&format!("Warning: {}.", msg));
    }

    /// Write `Info: <msg>.` to the console
    pub fn print_info(&self, msg: &str) {
        self.console.write_line(&format!("Info: {}.", msg));
    }
}

impl Default for FirmwareActionLogger {
    fn default() -> Self {
        Self::new(Arc::new(SyslogSink::new()), Arc::new(StdoutConsole::new()))
    }
}
