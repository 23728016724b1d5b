//! Test helpers for integration tests
//!
//! Configuration comes from the same `DB_*` variables the binary reads,
//! optionally via a `.env` file. Tests skip themselves when no server is
//! configured.

use anyhow::{bail, Context, Result};
use dbcheck_common::{load_dotenv, ConnectionConfig};
use dbcheck_core::{ConnectionUrl, DatabaseHandle, Driver};
use dbcheck_db::{PgDriver, PgHandle};

/// Load test configuration, or `None` when `DB_HOST` is not set
pub fn test_config() -> Option<ConnectionConfig> {
    load_dotenv();
    let config = ConnectionConfig::from_env();
    if config.host.is_empty() {
        None
    } else {
        Some(config)
    }
}

/// Check whether the test environment is configured
pub async fn check_test_env() -> bool {
    let Some(config) = test_config() else {
        eprintln!("Skipping test: DB_HOST not set");
        return false;
    };

    match ping(&config.connection_url()).await {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Skipping test: database not reachable: {e:#}");
            false
        }
    }
}

/// Open a handle and ping it, leaving it open
pub async fn open_live_handle(url: &ConnectionUrl) -> Result<PgHandle> {
    let mut handle = PgDriver::new()
        .open(url)
        .await
        .context("failed to open handle")?;

    if let Err(e) = handle.ping().await {
        handle.close().await;
        bail!("ping failed: {e}");
    }

    Ok(handle)
}

async fn ping(url: &ConnectionUrl) -> Result<()> {
    let handle = open_live_handle(url).await?;
    handle.close().await;
    Ok(())
}

/// The configured connection, with the password replaced
pub fn with_password(config: &ConnectionConfig, password: &str) -> ConnectionConfig {
    ConnectionConfig {
        password: password.to_string(),
        ..config.clone()
    }
}
