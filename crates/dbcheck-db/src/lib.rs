//! # dbcheck-db
//!
//! PostgreSQL implementation of the driver ports defined in `dbcheck-core`,
//! backed by a single SQLx connection.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dbcheck_core::{check_connection, ConnectionUrl};
//! use dbcheck_db::PgDriver;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = ConnectionUrl::build("postgres", "secret", "localhost", "5432", "app");
//!     check_connection(&PgDriver::new(), &url).await?;
//!     Ok(())
//! }
//! ```

pub mod driver;

pub use driver::{PgDriver, PgHandle};
