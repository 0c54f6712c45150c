//! Pure betting domain: odds, legs, bets, settlement and derived statistics.

pub mod bet;
pub mod error;
pub mod id;
pub mod money;
pub mod odds;
pub mod region;
pub mod settlement;
pub mod stats;
pub mod status;
pub mod team;

// Core domain types
pub use bet::{combined_price, price_payout, Bet, BetBuilder, BetKind, BetLeg};
pub use error::DomainError;
pub use id::{BetId, LegId};
pub use money::Money;
pub use odds::{Odds, OddsNotation};
pub use region::Region;
pub use settlement::Outcome;
pub use stats::{DailyProfit, PortfolioReport, PortfolioSummary, SkippedBet};
pub use status::SettlementStatus;
