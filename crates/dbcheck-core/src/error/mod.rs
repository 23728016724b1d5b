//! Domain error types

mod connect_error;

pub use connect_error::{ConnectError, DriverError};
