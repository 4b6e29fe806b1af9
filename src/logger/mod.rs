//! Logger module
//!
//! Provides logging utilities for the handler helpers including:
//! - Value logging for the `log` helper
//! - Chain outcome logging
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::{Level, LogEntry, LogFormat};

use crate::config::LoggingConfig;
use serde_json::Value;
use std::io;
use std::sync::OnceLock;
use writer::LogWriter;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let level = config
        .level
        .parse()
        .map_err(|e: String| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let format = config
        .format
        .parse()
        .map_err(|e: String| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    writer::init(LogWriter::new(
        level,
        format,
        config.log_file.as_deref(),
        config.error_log_file.as_deref(),
    )?)
}

/// Write an entry to the global writer, or stdout/stderr before `init()`
pub fn write(entry: &LogEntry) {
    static FALLBACK: OnceLock<LogWriter> = OnceLock::new();

    match writer::get() {
        Some(w) => w.write(entry),
        None => FALLBACK.get_or_init(LogWriter::fallback).write(entry),
    }
}

/// Log a value read from a request path
pub fn log_value(path: &str, value: Option<&Value>) {
    write(&value_entry(path, value));
}

fn value_entry(path: &str, value: Option<&Value>) -> LogEntry {
    let rendered = value.map_or_else(|| "undefined".to_string(), Value::to_string);
    LogEntry::new(Level::Info, "LOG", format!("{path} = {rendered}"))
        .field("path", Value::String(path.to_string()))
        .field("value", value.cloned().unwrap_or(Value::Null))
}

/// Log the outcome of a handler chain; status 0 means nothing was emitted
pub fn log_chain_result(method: &str, path: &str, status: u16) {
    let message = if status == 0 {
        format!("{method} {path} - no response")
    } else {
        format!("{method} {path} - {status}")
    };
    write(
        &LogEntry::new(Level::Debug, "CHAIN", message)
            .field("method", Value::String(method.to_string()))
            .field("path", Value::String(path.to_string()))
            .field("status", Value::from(status)),
    );
}

pub fn log_warning(message: &str) {
    write(&LogEntry::new(Level::Warn, "WARN", message));
}

pub fn log_error(message: &str) {
    write(&LogEntry::new(Level::Error, "ERROR", message));
}
