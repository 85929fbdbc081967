//! Log writer module
//!
//! Provides thread-safe, line-atomic log writing to files or stdout/stderr.
//! Every line is prefixed with a local timestamp. Info, warning and debug
//! lines are dropped when they are more verbose than the configured level.
//! Error and access lines are always written.

use crate::config::LogLevel;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Append to file
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Most verbose level written
    level: LogLevel,
    /// Access and info log target
    access: LogTarget,
    /// Error log target
    error: LogTarget,
}

impl LogWriter {
    /// Create a new log writer with optional file paths
    fn new(
        level: LogLevel,
        access_log_file: Option<&str>,
        error_log_file: Option<&str>,
    ) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };

        let error = match error_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };

        Ok(Self {
            level,
            access,
            error,
        })
    }

    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether messages at `level` pass the configured filter
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }

    /// Write to access log
    pub fn write_access(&self, message: &str) {
        write_to_target(&self.access, message);
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        write_to_target(&self.error, message);
    }

    /// Write warning message (to error log target)
    pub fn write_warning(&self, message: &str) {
        if self.enabled(LogLevel::Warn) {
            write_to_target(&self.error, message);
        }
    }

    /// Write info message (to access log target)
    pub fn write_info(&self, message: &str) {
        if self.enabled(LogLevel::Info) {
            write_to_target(&self.access, message);
        }
    }

    /// Write debug message (to access log target)
    pub fn write_debug(&self, message: &str) {
        if self.enabled(LogLevel::Debug) {
            write_to_target(&self.access, message);
        }
    }
}

/// Prefix a message with the current local time
pub fn stamp(message: &str) -> String {
    format!("{} {message}", Local::now().format(TIMESTAMP_FORMAT))
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

/// Write one stamped line to a log target
fn write_to_target(target: &LogTarget, message: &str) {
    let line = stamp(message);
    match target {
        LogTarget::Stdout => {
            let _ = writeln!(io::stdout().lock(), "{line}");
        }
        LogTarget::Stderr => {
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{line}");
            }
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if log files cannot be opened.
pub fn init(
    level: LogLevel,
    access_log_file: Option<&str>,
    error_log_file: Option<&str>,
) -> io::Result<()> {
    let writer = LogWriter::new(level, access_log_file, error_log_file)?;
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
