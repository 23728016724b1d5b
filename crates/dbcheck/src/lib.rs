//! # dbcheck
//!
//! Checks that a PostgreSQL database is reachable with credentials taken
//! from the environment: builds the connection URL, opens one handle,
//! pings it, and releases it.

use dbcheck_common::{AppResult, AppSettings, ConnectionConfig, DotenvStatus};
use dbcheck_core::{check_connection, Driver, Stage};
use tracing::{info, instrument, warn};

/// Printed to stdout when the database answered the ping
pub const SUCCESS_MESSAGE: &str = "Successfully connected to the database! 🎉";

/// Log the outcome of the `.env` load. Never fatal.
pub fn report_dotenv(status: &DotenvStatus) {
    match status {
        DotenvStatus::Loaded(path) => {
            info!(path = %path.display(), "Loaded environment file");
        }
        DotenvStatus::NotFound => {
            info!("Note: .env file not found, reading from OS environment variables");
        }
        DotenvStatus::Invalid(e) => {
            warn!(
                error = %e,
                "Ignoring unreadable .env file, reading from OS environment variables"
            );
        }
    }
}

/// Run the connection check with an already loaded configuration.
///
/// Empty `DB_*` variables are logged and passed through as empty strings,
/// unless `settings.strict` is set.
#[instrument(skip_all, fields(app = %settings.name))]
pub async fn run<D: Driver>(
    driver: &D,
    settings: &AppSettings,
    config: &ConnectionConfig,
) -> AppResult<()> {
    let missing = config.missing_vars();
    if !missing.is_empty() {
        if settings.strict {
            config.require_all()?;
        }
        warn!(missing = ?missing, "Database environment variables are unset or empty");
    }

    let url = config.connection_url();
    info!(url = %url, "Checking database connection");

    check_connection(driver, &url).await?;

    info!(stage = %Stage::Done, "Database connection verified");
    Ok(())
}
