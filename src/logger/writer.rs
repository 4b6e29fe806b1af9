//! Log writer module
//!
//! Provides thread-safe log writing to files or stdout/stderr.

use super::format::{Level, LogEntry, LogFormat};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(File),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Info log target (debug and info entries)
    info: Mutex<LogTarget>,
    /// Error log target (warn and error entries)
    error: Mutex<LogTarget>,
    min_level: Level,
    format: LogFormat,
}

impl LogWriter {
    /// Create a new log writer with optional file paths
    pub fn new(
        min_level: Level,
        format: LogFormat,
        log_file: Option<&str>,
        error_log_file: Option<&str>,
    ) -> io::Result<Self> {
        Ok(Self {
            info: Mutex::new(open_target(log_file, LogTarget::Stdout)?),
            error: Mutex::new(open_target(error_log_file, LogTarget::Stderr)?),
            min_level,
            format,
        })
    }

    /// Writer used before `init()` is called
    pub(crate) const fn fallback() -> Self {
        Self {
            info: Mutex::new(LogTarget::Stdout),
            error: Mutex::new(LogTarget::Stderr),
            min_level: Level::Info,
            format: LogFormat::Text,
        }
    }

    pub const fn enabled(&self, level: Level) -> bool {
        level as u8 >= self.min_level as u8
    }

    /// Write an entry to the target matching its level
    pub fn write(&self, entry: &LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        let line = entry.format(self.format);
        let target = if entry.level >= Level::Warn {
            lock(&self.error)
        } else {
            lock(&self.info)
        };
        write_to_target(&target, &line);
    }
}

fn lock(target: &Mutex<LogTarget>) -> MutexGuard<'_, LogTarget> {
    target.lock().unwrap_or_else(PoisonError::into_inner)
}

fn open_target(path: Option<&str>, default: LogTarget) -> io::Result<LogTarget> {
    match path {
        Some(p) => Ok(LogTarget::File(open_log_file(p)?)),
        None => Ok(default),
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write message to log target
fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => {
            println!("{message}");
        }
        LogTarget::Stderr => {
            eprintln!("{message}");
        }
        LogTarget::File(file) => {
            let mut f = file;
            let _ = writeln!(f, "{message}");
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if log files cannot be opened.
pub fn init(writer: LogWriter) -> io::Result<()> {
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if `init()` has been called
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}
