//! Application error types
//!
//! Everything that can end the process with a non-zero status.

use dbcheck_core::ConnectError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Process exit status for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connect(_) => 1,
            Self::Config(_) => 2,
        }
    }

    /// Get error code for structured logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connect(ConnectError::Setup(_)) => "CONNECTION_SETUP_ERROR",
            Self::Connect(ConnectError::Liveness(_)) => "CONNECTION_LIVENESS_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Step that failed
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Connect(e) => e.stage(),
            Self::Config(_) => "config",
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::from(ConnectError::Setup("x".into())).exit_code(), 1);
        assert_eq!(AppError::from(ConnectError::Liveness("x".into())).exit_code(), 1);
        assert_eq!(AppError::from(ConfigError::MissingVar("DB_HOST")).exit_code(), 2);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::from(ConnectError::Setup("x".into())).error_code(),
            "CONNECTION_SETUP_ERROR"
        );
        assert_eq!(
            AppError::from(ConnectError::Liveness("x".into())).error_code(),
            "CONNECTION_LIVENESS_ERROR"
        );
        assert_eq!(
            AppError::from(ConfigError::MissingVar("DB_HOST")).error_code(),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_messages() {
        let err = AppError::from(ConnectError::Liveness("connection refused".into()));
        assert_eq!(err.to_string(), "Unable to connect to database: connection refused");
        assert_eq!(err.stage(), "ping");

        let err = AppError::from(ConfigError::MissingVar("DB_HOST"));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variable: DB_HOST"
        );
        assert_eq!(err.stage(), "config");
    }
}
