//! Error types for sitelog.
//!
//! The keyword macros themselves cannot fail at runtime: misuse is a compile
//! error. The few fallible operations live around setup:
//! - Installing the process-wide logger more than once
//! - Loading a [`LogConfig`](crate::LogConfig) from malformed environment values
//!
//! # Result Type
//!
//! Use [`LogResult<T>`] as a convenient alias for `Result<T, LogError>`:
//!
//! ```rust
//! use sitelog::{LogConfig, LogResult};
//!
//! fn load() -> LogResult<LogConfig> {
//!     LogConfig::from_env()
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// Convenient result type for sitelog setup operations.
pub type LogResult<T> = std::result::Result<T, LogError>;

/// Errors that can occur while setting up logging.
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use sitelog::LogError;
///
/// let err = LogError::configuration("SITELOG_ENABLED", "maybe", "expected a boolean");
/// assert!(err.to_string().contains("SITELOG_ENABLED"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// A process-wide logger is already in place.
    ///
    /// Either [`install`](crate::install) was called twice, or
    /// [`logger`](crate::logger) already created the default logger.
    #[error("A process-wide logger is already installed")]
    AlreadyInstalled,

    /// A configuration value could not be parsed.
    #[error("Invalid configuration value {value:?} for {key}: {message}")]
    Configuration {
        /// The configuration key, usually an environment variable name.
        key: String,
        /// The raw value that was rejected.
        value: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl LogError {
    /// Whether the error comes from configuration input rather than call order.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create an already-installed error (logs at WARN level).
    pub fn already_installed() -> Self {
        log_warn!(
            error_type = "already_installed",
            "Process-wide logger is already installed"
        );
        Self::AlreadyInstalled
    }

    pub fn configuration(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let value = value.into();
        let message = message.into();
        log_error!(
            error_type = "configuration",
            key = %key,
            value = %value,
            message = %message,
            "Logging configuration value rejected"
        );
        Self::Configuration {
            key,
            value,
            message,
        }
    }
}
