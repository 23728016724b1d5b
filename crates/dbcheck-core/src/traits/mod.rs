//! Trait definitions (ports)

mod driver;

pub use driver::{DatabaseHandle, Driver, DriverResult};
