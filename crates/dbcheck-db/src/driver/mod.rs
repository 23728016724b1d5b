//! Database driver implementations

mod error;
mod postgres;

pub use postgres::{PgDriver, PgHandle};
