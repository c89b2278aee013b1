//! Firmware action logger unit tests

use std::sync::{Arc, Mutex};

use fwlog::{Action, ConsoleWriter, FirmwareActionLogger, Outcome, SystemLogger};

/// Captured system log call: (level, text)
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Info(String),
    Error(String),
}

#[derive(Default)]
struct RecordingSyslog {
    entries: Mutex<Vec<Entry>>,
}

impl RecordingSyslog {
    fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }
}

impl SystemLogger for RecordingSyslog {
    fn log_info(&self, text: &str) {
        self.entries.lock().unwrap().push(Entry::Info(text.to_string()));
    }

    fn log_error(&self, text: &str) {
        self.entries.lock().unwrap().push(Entry::Error(text.to_string()));
    }
}

#[derive(Default)]
struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ConsoleWriter for RecordingConsole {
    fn write_line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

fn create_test_logger() -> (
    FirmwareActionLogger,
    Arc<RecordingSyslog>,
    Arc<RecordingConsole>,
) {
    let syslog = Arc::new(RecordingSyslog::default());
    let console = Arc::new(RecordingConsole::default());
    let logger = FirmwareActionLogger::new(syslog.clone(), console.clone());
    (logger, syslog, console)
}

#[test]
fn test_action_start_logs_one_info_message() {
    let (logger, syslog, _) = create_test_logger();

    logger.log_download_start("PSU1", "v2.1");

    assert_eq!(
        syslog.entries(),
        vec![Entry::Info(
            "Firmware download started: component=PSU1, firmware=v2.1".to_string()
        )]
    );
}

#[test]
fn test_action_start_passes_empty_strings_verbatim() {
    let (logger, syslog, _) = create_test_logger();

    logger.log_action_start(Action::Update, "", "");

    assert_eq!(
        syslog.entries(),
        vec![Entry::Info(
            "Firmware update started: component=, firmware=".to_string()
        )]
    );
}

#[test]
fn test_action_end_success_logs_info() {
    let (logger, syslog, _) = create_test_logger();

    logger.log_update_end("BMC", "v3.0", Outcome::Success);

    assert_eq!(
        syslog.entries(),
        vec![Entry::Info(
            "Firmware update ended: component=BMC, firmware=v3.0, status=success".to_string()
        )]
    );
}

#[test]
fn test_action_end_failure_without_detail_logs_error() {
    let (logger, syslog, _) = create_test_logger();

    logger.log_download_end("PSU1", "v2.1", Outcome::failure());

    assert_eq!(
        syslog.entries(),
        vec![Entry::Error(
            "Firmware download ended: component=PSU1, firmware=v2.1, status=failure".to_string()
        )]
    );
}

#[test]
fn test_action_end_failure_with_detail_logs_error_with_exception() {
    let (logger, syslog, _) = create_test_logger();

    logger.log_install_end("BIOS", "v1.0", Outcome::failure_with("no ack"));

    assert_eq!(
        syslog.entries(),
        vec![Entry::Error(
            "Firmware install ended: component=BIOS, firmware=v1.0, status=failure, exception=no ack"
                .to_string()
        )]
    );
}

#[test]
fn test_convenience_pairs_use_fixed_action_labels() {
    let (logger, syslog, _) = create_test_logger();

    logger.log_download_start("c", "f");
    logger.log_install_start("c", "f");
    logger.log_update_start("c", "f");
    logger.log_download_end("c", "f", Outcome::Success);
    logger.log_install_end("c", "f", Outcome::Success);
    logger.log_update_end("c", "f", Outcome::Success);

    let entries = syslog.entries();
    assert_eq!(entries.len(), 6);
    for (entry, label) in entries.iter().zip([
        "download started",
        "install started",
        "update started",
        "download ended",
        "install ended",
        "update ended",
    ]) {
        match entry {
            Entry::Info(text) => assert!(
                text.starts_with(&format!("Firmware {}", label)),
                "expected '{}' in '{}'",
                label,
                text
            ),
            Entry::Error(text) => panic!("unexpected error entry: {}", text),
        }
    }
}

#[test]
fn test_generic_and_convenience_end_match() {
    let (generic_logger, generic_syslog, _) = create_test_logger();
    let (convenience_logger, convenience_syslog, _) = create_test_logger();

    generic_logger.log_action_end(Action::Install, "BIOS", "v1.0", Outcome::failure());
    convenience_logger.log_install_end("BIOS", "v1.0", Outcome::failure());

    assert_eq!(generic_syslog.entries(), convenience_syslog.entries());
}

#[test]
fn test_print_helpers_write_prefixed_lines() {
    let (logger, syslog, console) = create_test_logger();

    logger.print_error("disk full");
    logger.print_warning("firmware image is older than installed version");
    logger.print_info("reboot required");

    assert_eq!(
        console.lines(),
        vec![
            "Error: disk full.".to_string(),
            "Warning: firmware image is older than installed version.".to_string(),
            "Info: reboot required.".to_string(),
        ]
    );
    // Console helpers never touch the system log
    assert!(syslog.entries().is_empty());
}

#[test]
fn test_logging_calls_do_not_write_to_console() {
    let (logger, _, console) = create_test_logger();

    logger.log_download_start("PSU1", "v2.1");
    logger.log_download_end("PSU1", "v2.1", Outcome::failure_with("timeout"));

    assert!(console.lines().is_empty());
}
