//! Connection errors - failures of the open/ping flow

use std::fmt;

use thiserror::Error;

/// Error reported by a [`Driver`](crate::traits::Driver) or its handle.
///
/// Drivers do not classify their failures; the connector decides whether a
/// driver error means the setup or the liveness probe failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DriverError {
    message: String,
}

impl DriverError {
    #[must_use]
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Fatal connection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// Malformed connection URL or driver initialization failure
    #[error("Unable to open database connection: {0}")]
    Setup(String),

    /// Handle opened, but the server was unreachable or rejected the probe
    #[error("Unable to connect to database: {0}")]
    Liveness(String),
}

impl ConnectError {
    /// Name of the step that failed, for structured logging
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Setup(_) => "open",
            Self::Liveness(_) => "ping",
        }
    }

    #[must_use]
    pub fn is_setup(&self) -> bool {
        matches!(self, Self::Setup(_))
    }

    #[must_use]
    pub fn is_liveness(&self) -> bool {
        matches!(self, Self::Liveness(_))
    }

    pub(crate) fn setup(err: DriverError) -> Self {
        Self::Setup(err.message)
    }

    pub(crate) fn liveness(err: DriverError) -> Self {
        Self::Liveness(err.message)
    }
}
