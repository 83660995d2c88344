//! Logging for the View3D kernel
//!
//! The math itself is pure; logging exists so that rejected inputs
//! (zero-length normalization, degenerate cameras, malformed flat arrays)
//! can be traced from the host application.
//!
//! - Pluggable sink via the `Logger` trait
//! - Severity levels with a process-wide threshold (see `Kernel::set_min_severity`)
//! - Colored console output by default
//! - File and line information on ERROR entries

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for kernel log entries.
///
/// Install a custom implementation with `Kernel::set_logger` to route
/// entries to a file, the host application's console, a test buffer...
///
/// # Example
///
/// ```no_run
/// use view3d_kernel::view3d::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{} {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Consume one log entry
    fn log(&self, entry: &LogEntry);
}

/// A single log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Time the entry was created
    pub timestamp: SystemTime,

    /// Emitting component (e.g. "view3d::Camera", "view3d::Vector3")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Source line (ERROR entries only)
    pub line: Option<u32>,
}

impl LogEntry {
    /// Create an entry stamped with the current time and no location
    pub fn new(severity: LogSeverity, source: &str, message: String) -> Self {
        Self {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        }
    }

    /// Attach a file:line location
    pub fn with_location(mut self, file: &'static str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by `DefaultLogger`
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger with colored severities.
///
/// Format:
/// - `[timestamp] [SEVERITY] [source] message`
/// - `[timestamp] [SEVERITY] [source] message (file:line)` when a location is attached
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry without colors (the layout printed by `log`)
    pub fn format_plain(entry: &LogEntry) -> String {
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            Self::format_timestamp(entry.timestamp),
            entry.severity.label(),
            entry.source,
            entry.message
        );
        if let (Some(file), Some(at)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, at));
        }
        line
    }

    /// YYYY-MM-DD HH:MM:SS.mmm in local time
    fn format_timestamp(timestamp: SystemTime) -> String {
        let datetime: DateTime<Local> = timestamp.into();
        datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let timestamp = Self::format_timestamp(entry.timestamp);

        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! kernel_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::view3d::Kernel::log(
            $crate::view3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```ignore
/// kernel_debug!("view3d::Camera", "rebuilt basis for {}", camera);
/// ```
#[macro_export]
macro_rules! kernel_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::view3d::Kernel::log(
            $crate::view3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! kernel_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::view3d::Kernel::log(
            $crate::view3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! kernel_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::view3d::Kernel::log(
            $crate::view3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! kernel_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::view3d::Kernel::log_detailed(
            $crate::view3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
