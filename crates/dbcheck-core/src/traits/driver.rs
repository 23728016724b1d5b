//! Driver ports - the capability the connector needs from a database client
//!
//! The connector only knows how to open a handle from a URL, ping it, and
//! close it. The infrastructure layer provides the real implementation;
//! tests substitute a fake one.

use async_trait::async_trait;

use crate::error::DriverError;
use crate::value_objects::ConnectionUrl;

/// Result type for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

#[async_trait]
pub trait Driver: Send + Sync {
    type Handle: DatabaseHandle;

    /// Validate the URL and allocate client-side state.
    ///
    /// Must not require the server to be reachable.
    async fn open(&self, url: &ConnectionUrl) -> DriverResult<Self::Handle>;
}

#[async_trait]
pub trait DatabaseHandle: Send {
    /// Round trip to the server to confirm reachability and authentication
    async fn ping(&mut self) -> DriverResult<()>;

    /// Release the session. Consumes the handle, so it runs at most once.
    async fn close(self);
}
