//! Integration test utilities for the club server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API: a spawned real server, an HTTP client, and database
//! fixtures. All tests skip gracefully when DATABASE_URL is absent or
//! unreachable.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
