//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry formatting, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn make_entry(severity: LogSeverity, location: Option<(&'static str, u32)>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy3d::DebugRenderer".to_string(),
        message: "box cache miss".to_string(),
        file: location.map(|(file, _)| file),
        line: location.map(|(_, line)| line),
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Warn.label(), "WARN ");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_format_line_without_location() {
    let entry = make_entry(LogSeverity::Debug, None);
    assert_eq!(
        entry.format_line(),
        "[DEBUG] [galaxy3d::DebugRenderer] box cache miss"
    );
}

#[test]
fn test_format_line_with_location() {
    let entry = make_entry(LogSeverity::Error, Some(("debug_renderer.rs", 88)));
    assert_eq!(
        entry.format_line(),
        "[ERROR] [galaxy3d::DebugRenderer] box cache miss (debug_renderer.rs:88)"
    );
}

#[test]
fn test_log_entry_clone() {
    let entry1 = make_entry(LogSeverity::Warn, Some(("brush.rs", 10)));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Both output branches must not panic
        logger.log(&make_entry(severity, None));
        logger.log(&make_entry(severity, Some(("test.rs", 42))));
    }
}

// ============================================================================
// LOGGER TRAIT TESTS
// ============================================================================

struct CountingLogger {
    logged_count: std::sync::Mutex<usize>,
}

impl Logger for CountingLogger {
    fn log(&self, _entry: &LogEntry) {
        *self.logged_count.lock().unwrap() += 1;
    }
}

#[test]
fn test_custom_logger_implementation() {
    let logger = CountingLogger { logged_count: std::sync::Mutex::new(0) };
    let entry = make_entry(LogSeverity::Info, None);

    logger.log(&entry);
    logger.log(&entry);
    assert_eq!(*logger.logged_count.lock().unwrap(), 2);
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}
