//! JSON serialization for statistics output.

use serde_json::{json, Value};

use crate::application::BetFacets;
use crate::domain::{DailyProfit, PortfolioSummary, SkippedBet};
use crate::port::RejectedRow;

/// Convert a portfolio summary to JSON.
pub fn summary_to_json(summary: &PortfolioSummary) -> Value {
    json!({
        "total_bets": summary.total_bets,
        "settled_bets": summary.settled_bets,
        "won_bets": summary.won_bets,
        "lost_bets": summary.lost_bets,
        "win_rate_pct": summary.win_rate,
        "total_staked": summary.total_staked,
        "total_profit": summary.total_profit,
        "average_stake": summary.average_stake,
        "pending_bets": summary.pending_bets,
        "pending_stake": summary.pending_stake,
    })
}

/// Convert the daily series to JSON.
pub fn daily_to_json(rows: &[DailyProfit]) -> Value {
    let payload: Vec<_> = rows
        .iter()
        .map(|row| {
            json!({
                "date": row.date.to_string(),
                "net_profit": row.net_profit,
                "bet_count": row.bet_count,
            })
        })
        .collect();
    json!(payload)
}

/// Skipped bets and rejected ledger rows as one list.
pub fn skipped_to_json(skipped: &[SkippedBet], rejected: &[RejectedRow]) -> Value {
    let rows = rejected.iter().map(|row| {
        json!({
            "row": row.index,
            "bet_id": row.id,
            "reason": row.reason,
        })
    });
    let bets = skipped.iter().map(|bet| {
        json!({
            "bet_id": bet.bet_id.as_str(),
            "reason": bet.reason,
        })
    });
    json!(rows.chain(bets).collect::<Vec<_>>())
}

pub fn facets_to_json(facets: &BetFacets) -> Value {
    json!({
        "sports": facets.sports,
        "leagues": facets.leagues,
        "statuses": facets.statuses,
    })
}
