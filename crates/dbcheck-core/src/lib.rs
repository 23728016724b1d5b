//! # dbcheck-core
//!
//! Domain layer: the connection URL value object, the driver ports, and the
//! connector flow that opens a handle, probes it, and releases it.
//! This crate has no dependency on a concrete database driver.

pub mod connector;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use connector::{check_connection, Stage};
pub use error::{ConnectError, DriverError};
pub use traits::{DatabaseHandle, Driver, DriverResult};
pub use value_objects::ConnectionUrl;
