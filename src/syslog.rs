//! System log sink
//!
//! The fwutil CLI logs firmware actions under a fixed syslog identifier so
//! host log aggregation can pick them out. `SyslogSink` is the production
//! implementation, forwarding to the process-wide tracing subscriber with
//! that identifier as the event target.

use tracing::{error, info};

/// Fixed identifier tag for all system log messages emitted by the tool
pub const SYSLOG_IDENTIFIER: &str = "fwutil";

/// Leveled text sink for the system log
///
/// Implementations must be safe to share between callers; the helper takes
/// `&self` everywhere and holds no state of its own.
pub trait SystemLogger: Send + Sync {
    /// Record an info-level message
    fn log_info(&self, text: &str);

    /// Record an error-level message
    fn log_error(&self, text: &str);
}

/// Tracing-backed system logger tagged with [`SYSLOG_IDENTIFIER`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SyslogSink;

impl SyslogSink {
    pub fn new() -> Self {
        Self
    }
}

impl SystemLogger for SyslogSink {
    fn log_info(&self, text: &str) {
        info!(target: SYSLOG_IDENTIFIER, "{}", text);
    }

    fn log_error(&self, text: &str) {
        error!(target: SYSLOG_IDENTIFIER, "{}", text);
    }
}
