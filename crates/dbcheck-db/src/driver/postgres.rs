//! PostgreSQL driver
//!
//! `open` only parses the URL into connect options. The socket is opened on
//! the first `ping`, so an unreachable server surfaces as a liveness failure.
//! A URL without a host falls back to libpq defaults (`PGHOST`, the local
//! socket, or `localhost`) instead of being rejected.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, instrument, warn};

use dbcheck_core::traits::{DatabaseHandle, Driver, DriverResult};
use dbcheck_core::{ConnectionUrl, DriverError};

use super::error::map_db_error;

/// SQLx-backed PostgreSQL driver
#[derive(Debug, Clone, Copy, Default)]
pub struct PgDriver;

impl PgDriver {
    /// Create a new PgDriver
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Driver for PgDriver {
    type Handle = PgHandle;

    #[instrument(skip_all)]
    async fn open(&self, url: &ConnectionUrl) -> DriverResult<PgHandle> {
        let options = if url.host().is_empty() {
            default_host_options(url)?
        } else {
            PgConnectOptions::from_str(url.as_str()).map_err(map_db_error)?
        };
        debug!(
            host = options.get_host(),
            port = options.get_port(),
            "Parsed connection options"
        );

        Ok(PgHandle {
            options,
            conn: None,
        })
    }
}

/// Options for a URL with no host, built on top of the environment defaults.
///
/// Empty parts keep the default, as they do when sqlx parses a full URL.
fn default_host_options(url: &ConnectionUrl) -> DriverResult<PgConnectOptions> {
    let mut options = PgConnectOptions::new().ssl_mode(PgSslMode::Disable);

    if !url.port().is_empty() {
        let port = url
            .port()
            .parse::<u16>()
            .map_err(|_| DriverError::new(format!("invalid port number: {}", url.port())))?;
        options = options.port(port);
    }
    if !url.user().is_empty() {
        options = options.username(url.user());
    }
    if !url.password().is_empty() {
        options = options.password(url.password());
    }
    if !url.database().is_empty() {
        options = options.database(url.database());
    }

    Ok(options)
}

/// One PostgreSQL session
pub struct PgHandle {
    options: PgConnectOptions,
    conn: Option<PgConnection>,
}

impl PgHandle {
    /// Options parsed from the connection URL
    pub fn options(&self) -> &PgConnectOptions {
        &self.options
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }
}

#[async_trait]
impl DatabaseHandle for PgHandle {
    #[instrument(skip_all)]
    async fn ping(&mut self) -> DriverResult<()> {
        if self.conn.is_none() {
            let conn = self.options.connect().await.map_err(map_db_error)?;
            debug!("Connection established");
            self.conn = Some(conn);
        }

        if let Some(conn) = self.conn.as_mut() {
            conn.ping().await.map_err(map_db_error)?;
        }

        Ok(())
    }

    #[instrument(skip_all)]
    async fn close(self) {
        let Some(conn) = self.conn else {
            return;
        };

        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close connection cleanly");
        }
    }
}
