//! Connection check flow
//!
//! `Start -> ConfigLoaded -> HandleOpened -> LivenessConfirmed -> Done`, with
//! any failure ending in `Failed`. Nothing is retried.

use std::fmt;

use tracing::{debug, instrument, warn};

use crate::error::ConnectError;
use crate::traits::{DatabaseHandle, Driver};
use crate::value_objects::ConnectionUrl;

/// Step of the connection check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ConfigLoaded,
    HandleOpened,
    LivenessConfirmed,
    Done,
    Failed,
}

impl Stage {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::ConfigLoaded => "config_loaded",
            Self::HandleOpened => "handle_opened",
            Self::LivenessConfirmed => "liveness_confirmed",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open one handle against `url`, ping it, and release it.
///
/// Once `open` succeeds the handle is closed exactly once before this
/// function returns, whether or not the ping succeeded.
#[instrument(skip_all, fields(url = %url))]
pub async fn check_connection<D: Driver>(
    driver: &D,
    url: &ConnectionUrl,
) -> Result<(), ConnectError> {
    debug!(stage = %Stage::ConfigLoaded, "Opening database handle");

    let mut handle = driver.open(url).await.map_err(|e| {
        warn!(stage = %Stage::Failed, error = %e, "Failed to open database handle");
        ConnectError::setup(e)
    })?;

    debug!(stage = %Stage::HandleOpened, "Probing database");
    let probe = handle.ping().await;

    handle.close().await;
    debug!("Database handle released");

    match probe {
        Ok(()) => {
            debug!(stage = %Stage::LivenessConfirmed, "Database is reachable");
            Ok(())
        }
        Err(e) => {
            warn!(stage = %Stage::Failed, error = %e, "Liveness probe failed");
            Err(ConnectError::liveness(e))
        }
    }
}
