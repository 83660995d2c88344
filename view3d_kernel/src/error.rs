//! Error types for the View3D math kernel
//!
//! Every failure is local to the call that produced it. Nothing is retried
//! and nothing is swallowed: a caller can always tell a legitimate zero or
//! degenerate value apart from an error.

use std::fmt;

/// Result type for View3D kernel operations
pub type Result<T> = std::result::Result<T, Error>;

/// View3D kernel errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Division by a zero length, determinant or height
    DivideByZero(String),

    /// Bounding box coordinates that cannot be ordered (NaN, infinity)
    InvalidBounds(String),

    /// Camera parameters that admit no stable basis or projection
    DegenerateCamera(String),

    /// Flat input whose length does not match the target dimension
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivideByZero(msg) => write!(f, "Divide by zero: {}", msg),
            Error::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            Error::DegenerateCamera(msg) => write!(f, "Degenerate camera: {}", msg),
            Error::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: expected {} components, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an error, record it at DEBUG severity, and evaluate to it.
///
/// # Example
///
/// ```ignore
/// return Err(kernel_err!("view3d::Vector3", Error::DivideByZero("zero length".into())));
/// ```
#[macro_export]
macro_rules! kernel_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::view3d::Error = $error;
        $crate::kernel_debug!($source, "{}", error);
        error
    }};
}

/// Build an error, record it, and return it from the enclosing function.
///
/// # Example
///
/// ```ignore
/// if len == 0.0 {
///     kernel_bail!("view3d::Vector3", Error::DivideByZero("zero length".into()));
/// }
/// ```
#[macro_export]
macro_rules! kernel_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::kernel_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
