//! Application services (use cases).
//!
//! These services orchestrate domain logic over bet history and user
//! preferences, reaching storage only through ports.

pub mod filter;
pub mod portfolio;
pub mod preference;

pub use filter::{BetFacets, BetFilter};
pub use portfolio::{BetAggregator, Evaluation, SettledBet};
pub use preference::{NotationSource, OddsPreferences, ResolvedNotation, RuntimeEnvironment};
