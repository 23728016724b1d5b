//! Connector - open a handle, probe it, release it

mod check;

pub use check::{check_connection, Stage};
