//! Builders for domain primitives used across tests.
//!
//! Bets are restored rather than placed so tests can carry malformed odds
//! into the aggregates.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Bet, BetLeg, Money, Odds, OddsNotation, SettlementStatus};

/// A UTC instant on the hour.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test time {year}-{month}-{day} {hour}:00"))
}

/// A leg with the given odds and status, starting at `start`.
pub fn leg(odds: &str, notation: OddsNotation, status: SettlementStatus, start: DateTime<Utc>) -> BetLeg {
    BetLeg::new(
        "Hockey",
        "NHL",
        "Boston Bruins @ Toronto Maple Leafs",
        "Boston Bruins",
        Odds::new(odds, notation),
        start,
    )
    .with_status(status)
}

/// A single bet placed at `placed_at`, keeping `odds` unvalidated.
pub fn single_bet(
    stake: Money,
    odds: &str,
    notation: OddsNotation,
    status: SettlementStatus,
    placed_at: DateTime<Utc>,
) -> Bet {
    Bet::builder()
        .bookmaker("Test Book")
        .stake(stake)
        .leg(leg(odds, notation, status, placed_at))
        .restore(stake, placed_at)
        .unwrap_or_else(|e| panic!("invalid test bet: {e}"))
}

/// A parlay of decimal-odds legs placed at `placed_at`.
pub fn parlay_bet(stake: Money, legs: &[(&str, SettlementStatus)], placed_at: DateTime<Utc>) -> Bet {
    Bet::builder()
        .bookmaker("Test Book")
        .stake(stake)
        .legs(
            legs.iter()
                .map(|(odds, status)| leg(odds, OddsNotation::Decimal, *status, placed_at)),
        )
        .restore(stake, placed_at)
        .unwrap_or_else(|e| panic!("invalid test parlay: {e}"))
}
