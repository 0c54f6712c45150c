//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for legs and bets at fixed times.
//! - [`config`] - Configurations pointing storage into a temp directory.

pub mod config;
pub mod domain;
