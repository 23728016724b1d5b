//! Value objects - immutable types with validation

mod connection_url;

pub use connection_url::ConnectionUrl;
