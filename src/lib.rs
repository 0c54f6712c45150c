//! Betledger - sports bet tracking.
//!
//! Converts odds between American, decimal and fractional notation, settles
//! single and parlay bets, and aggregates a bet history into portfolio
//! statistics.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Odds, bets, settlement and statistics types. Pure, no I/O.
//! - [`application`] - Aggregation, filtering and preference resolution.
//! - [`port`] - Traits for the bet ledger and the preference store.
//! - [`adapter`] - JSON file storage and the command-line interface.
//! - [`infrastructure`] - TOML configuration and logging setup.
//! - [`error`] - Error types for the crate.
//!
//! # Example
//!
//! ```
//! use betledger::domain::odds::{convert, OddsNotation};
//!
//! let fractional = convert("-110", OddsNotation::American, OddsNotation::Fractional).unwrap();
//! assert_eq!(fractional, "10/11");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
