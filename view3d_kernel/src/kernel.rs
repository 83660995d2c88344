/// View3D Kernel - process-wide logging configuration
///
/// The math types carry no shared state. The only global in the crate is
/// the log sink and its severity threshold, stored in `OnceLock<RwLock<_>>`
/// so any thread may log while another swaps the logger.

use std::sync::{OnceLock, RwLock};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

/// Threshold used until `set_min_severity` is called
pub const DEFAULT_MIN_SEVERITY: LogSeverity = LogSeverity::Info;

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn severity_lock() -> &'static RwLock<LogSeverity> {
    MIN_SEVERITY.get_or_init(|| RwLock::new(DEFAULT_MIN_SEVERITY))
}

// ===== PUBLIC API =====

/// Kernel-wide logging entry point
///
/// # Example
///
/// ```no_run
/// use view3d_kernel::view3d::{Kernel, log::{Logger, LogEntry, LogSeverity}};
///
/// struct Silent;
/// impl Logger for Silent {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// Kernel::set_logger(Silent);
/// Kernel::set_min_severity(LogSeverity::Debug);
/// ```
pub struct Kernel;

impl Kernel {
    /// Replace the logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore `DefaultLogger`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the minimum severity forwarded to the logger
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = severity_lock().write() {
            *lock = severity;
        }
    }

    /// Current minimum severity
    pub fn min_severity() -> LogSeverity {
        severity_lock()
            .read()
            .map(|lock| *lock)
            .unwrap_or(DEFAULT_MIN_SEVERITY)
    }

    /// Whether an entry of this severity would reach the logger
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Log without file:line (used by kernel_trace! .. kernel_warn!)
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Emitting component (e.g., "view3d::Camera")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry::new(severity, source, message));
    }

    /// Log with file:line (used by kernel_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry::new(severity, source, message).with_location(file, line));
    }

    fn dispatch(entry: LogEntry) {
        if !Self::is_enabled(entry.severity) {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&entry);
        }
    }

    /// Restore logger and threshold defaults (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        Self::reset_logger();
        Self::set_min_severity(DEFAULT_MIN_SEVERITY);
    }
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
