//! Portfolio statistics types.
//!
//! Derived views over a bet collection. Nothing here is persisted.

use chrono::NaiveDate;
use serde::Serialize;

use super::id::BetId;
use super::money::Money;

/// Net profit for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyProfit {
    pub date: NaiveDate,
    pub net_profit: Money,
    pub bet_count: usize,
}

/// Summary statistics over the settled part of a bet collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Bets considered: settled plus pending, excluding skipped records.
    pub total_bets: usize,
    pub settled_bets: usize,
    pub won_bets: usize,
    pub lost_bets: usize,
    /// Won bets as a percentage of settled bets, 0 with none settled.
    pub win_rate: f64,
    pub total_staked: Money,
    pub total_profit: Money,
    pub average_stake: Money,
    /// Stake on bets not yet settled, never merged into `total_staked`.
    pub pending_bets: usize,
    pub pending_stake: Money,
    pub daily: Vec<DailyProfit>,
}

/// A record left out of the aggregates, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBet {
    pub bet_id: BetId,
    pub reason: String,
}

/// Summary plus the records that could not be evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub summary: PortfolioSummary,
    pub skipped: Vec<SkippedBet>,
}
