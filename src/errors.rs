//! Error handling for the logsieve crate
//!
//! Structured error types for the sink, reader, and configuration
//! surfaces. Logging itself is best-effort, so most of these never
//! reach a caller; they exist so the write boundary can report a
//! precise failure before swallowing it.

use thiserror::Error;

/// Main error type for the logsieve crate
#[derive(Error, Debug)]
pub enum SieveError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown severity level: {value}")]
    InvalidLevel { value: String },

    #[error("Mutex lock failed: {resource}")]
    MutexPoisoned { resource: String },
}

/// Type alias for Result with SieveError
pub type SieveResult<T> = Result<T, SieveError>;

impl SieveError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create an unknown-severity error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        Self::InvalidLevel {
            value: value.into(),
        }
    }
}

/// Helper trait for safe mutex operations
///
/// Provides mutex acquisition that returns a proper error on poison
/// instead of panicking, so the sink stays best-effort even after a
/// writer thread dies mid-append.
pub trait SafeLock<T: ?Sized> {
    /// Safely lock a mutex, returning a SieveError on poison
    fn safe_lock(&self) -> SieveResult<std::sync::MutexGuard<'_, T>>;
}

impl<T: ?Sized> SafeLock<T> for std::sync::Mutex<T> {
    fn safe_lock(&self) -> SieveResult<std::sync::MutexGuard<'_, T>> {
        self.lock().map_err(|_| SieveError::MutexPoisoned {
            resource: "writer_lock".to_string(),
        })
    }
}

/// Convert from std::io errors
impl From<std::io::Error> for SieveError {
    fn from(err: std::io::Error) -> Self {
        SieveError::io("io_operation", err)
    }
}
