//! dbcheck entry point
//!
//! Run with:
//! ```bash
//! cargo run -p dbcheck
//! ```
//!
//! Reads `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`, from a
//! local `.env` file if present, then the process environment.

use dbcheck::{report_dotenv, SUCCESS_MESSAGE};
use dbcheck_common::{
    load_dotenv, try_init_tracing_with_config, AppSettings, ConnectionConfig, TracingConfig,
};
use dbcheck_core::Stage;
use dbcheck_db::PgDriver;
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env before reading APP_ENV so the file can pick the log format
    let dotenv = load_dotenv();
    let settings = AppSettings::from_env();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(settings.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    debug!(stage = %Stage::Start, app = %settings.name, "Starting database check");
    report_dotenv(&dotenv);

    let config = ConnectionConfig::from_env();

    match dbcheck::run(&PgDriver::new(), &settings, &config).await {
        Ok(()) => println!("{SUCCESS_MESSAGE}"),
        Err(e) => {
            error!(
                code = e.error_code(),
                stage = e.stage(),
                error = %e,
                "Database check failed"
            );
            std::process::exit(e.exit_code());
        }
    }
}
