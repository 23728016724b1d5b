//! Error handling utilities for the driver

use dbcheck_core::DriverError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DriverError
pub fn map_db_error(e: SqlxError) -> DriverError {
    DriverError::new(e)
}
