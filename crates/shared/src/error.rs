//! Application-wide error types.
//!
//! The analytics engine itself never fails. These errors belong to the
//! edges: loading configuration, reading snapshots, validating user input.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data snapshot was not valid JSON for the expected shape.
    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Config(_) => 3,
            Self::Io(_) => 4,
            Self::Snapshot(_) => 5,
            Self::Internal(_) => 1,
        }
    }

    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Snapshot(_) => "INVALID_SNAPSHOT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_error() -> AppError {
        AppError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
    }

    fn io_error() -> AppError {
        AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::Validation(String::new()).exit_code(), 2);
        assert_eq!(
            AppError::Config(config::ConfigError::NotFound("x".into())).exit_code(),
            3
        );
        assert_eq!(io_error().exit_code(), 4);
        assert_eq!(snapshot_error().exit_code(), 5);
        assert_eq!(AppError::Internal(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Config(config::ConfigError::NotFound("x".into())).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(io_error().error_code(), "IO_ERROR");
        assert_eq!(snapshot_error().error_code(), "INVALID_SNAPSHOT");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
        assert_eq!(io_error().to_string(), "I/O error: missing");
        assert!(snapshot_error().to_string().starts_with("Invalid snapshot: "));
    }
}
