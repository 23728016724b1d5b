//! Integration test utilities for dbcheck
//!
//! This crate provides helpers for running end-to-end checks against a
//! live PostgreSQL server.

pub mod helpers;

pub use helpers::*;
