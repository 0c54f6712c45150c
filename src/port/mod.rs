//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the application services and the outside
//! world: where bets are read from and where user preferences are kept.
//!
//! # Available Ports
//!
//! - [`BetSource`] - Stored bet history
//! - [`PreferenceStore`] - Persisted user preferences

pub mod outbound;

pub use outbound::ledger::{BetSource, LoadedBets, RejectedRow};
pub use outbound::preference::{PreferenceStore, Preferences};
