//! Stored ledger row types.
//!
//! A ledger is a JSON array of bet rows (or an object with a `bets` array):
//! ```json
//! [{"id":"b1","bookmaker":"Bet365","stake":"100","potential_payout":"190.91",
//!   "placed_at":"2024-03-01T18:00:00Z","legs":[{"sport":"Hockey","league":"NHL",
//!   "event_name":"BOS @ TOR","selection":"BOS","odds":-110,"odds_type":"american",
//!   "status":"Won","event_start":"2024-03-01T23:00:00Z"}]}]
//! ```
//!
//! A single-leg row may carry its outcome on the bet alone; the leg then
//! inherits it. Multi-leg bets derive their status from their legs, so a
//! parlay row's own `status` only matters when it is `Cashout`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    Bet, BetId, BetKind, BetLeg, DomainError, LegId, Money, Odds, OddsNotation, SettlementStatus,
};

/// Top-level ledger document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LedgerDocument {
    Rows(Vec<serde_json::Value>),
    Wrapped { bets: Vec<serde_json::Value> },
}

impl LedgerDocument {
    pub fn into_rows(self) -> Vec<serde_json::Value> {
        match self {
            Self::Rows(rows) | Self::Wrapped { bets: rows } => rows,
        }
    }
}

/// Odds as stored: American lines are often written as bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredOdds {
    Text(String),
    Number(serde_json::Number),
}

impl StoredOdds {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sport: String,
    pub league: String,
    pub event_name: String,
    pub selection: String,
    pub odds: StoredOdds,
    pub odds_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub event_start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetRow {
    pub id: String,
    #[serde(default)]
    pub bookmaker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub stake: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_payout: Option<Money>,
    pub placed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_cashout: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashout_value: Option<Money>,
    pub legs: Vec<LegRow>,
}

impl LegRow {
    /// `fallback` applies when the row carries no status of its own.
    fn into_leg(self, fallback: SettlementStatus) -> Result<BetLeg, DomainError> {
        let notation: OddsNotation = self.odds_type.parse()?;
        let status = match self.status {
            Some(status) => status.parse()?,
            None => fallback,
        };

        let mut leg = BetLeg::new(
            self.sport,
            self.league,
            self.event_name,
            self.selection,
            Odds::new(self.odds.into_text(), notation),
            self.event_start,
        )
        .with_status(status);
        if let Some(id) = self.id {
            leg = leg.with_id(LegId::new(id));
        }
        if let Some(end) = self.event_end {
            leg = leg.with_event_end(end);
        }
        Ok(leg)
    }
}

impl TryFrom<BetRow> for Bet {
    type Error = DomainError;

    fn try_from(row: BetRow) -> Result<Self, Self::Error> {
        let bet_status: Option<SettlementStatus> = row.status.as_deref().map(str::parse).transpose()?;
        let is_cashout = row.is_cashout || bet_status == Some(SettlementStatus::Cashout);
        let leg_count = row.legs.len();

        // Single-leg rows often record the outcome on the bet only.
        let leg_fallback = match (row.legs.len(), bet_status) {
            (1, Some(status)) if status != SettlementStatus::Cashout => status,
            _ => SettlementStatus::Pending,
        };
        let legs = row
            .legs
            .into_iter()
            .map(|leg| leg.into_leg(leg_fallback))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = Bet::builder()
            .id(BetId::new(row.id))
            .bookmaker(row.bookmaker)
            .stake(row.stake)
            .legs(legs)
            .settled_at(row.settled_at)
            .cashout(is_cashout, row.cashout_value);
        if let Some(kind) = row.bet_type {
            builder = builder.kind(kind.parse::<BetKind>()?);
        }

        let bet = match row.potential_payout {
            Some(payout) => builder.restore(payout, row.placed_at)?,
            None => builder.place(row.placed_at)?,
        };

        if let Some(stored) = bet_status {
            if leg_count > 1 && stored != bet.status() {
                debug!(
                    bet_id = %bet.id(),
                    stored = %stored,
                    derived = %bet.status(),
                    "Row status differs from leg statuses, using legs"
                );
            }
        }
        Ok(bet)
    }
}

impl From<&BetLeg> for LegRow {
    fn from(leg: &BetLeg) -> Self {
        Self {
            id: Some(leg.id().as_str().to_string()),
            sport: leg.sport().to_string(),
            league: leg.league().to_string(),
            event_name: leg.event_name().to_string(),
            selection: leg.selection().to_string(),
            odds: StoredOdds::Text(leg.odds().value().to_string()),
            odds_type: leg.odds().notation().name().to_string(),
            status: Some(leg.status().name().to_string()),
            event_start: leg.event_start(),
            event_end: leg.event_end(),
        }
    }
}

impl From<&Bet> for BetRow {
    fn from(bet: &Bet) -> Self {
        Self {
            id: bet.id().as_str().to_string(),
            bookmaker: bet.bookmaker().to_string(),
            bet_type: Some(bet.kind().name().to_string()),
            status: Some(bet.status().name().to_string()),
            stake: bet.stake(),
            potential_payout: Some(bet.potential_payout()),
            placed_at: bet.placed_at(),
            settled_at: bet.settled_at(),
            is_cashout: bet.is_cashout(),
            cashout_value: bet.cashout_value(),
            legs: bet.legs().iter().map(LegRow::from).collect(),
        }
    }
}
