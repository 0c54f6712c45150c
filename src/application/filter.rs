//! Filtering bet history by sport, league and status.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{Bet, BetLeg, SettlementStatus};

/// Criteria for narrowing a bet list. Unset criteria match everything.
///
/// A bet matches when at least one of its legs satisfies every set
/// criterion, so a parlay spanning NBA and NHL shows up under either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetFilter {
    pub sport: Option<String>,
    pub league: Option<String>,
    pub status: Option<SettlementStatus>,
}

impl BetFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    #[must_use]
    pub fn league(mut self, league: impl Into<String>) -> Self {
        self.league = Some(league.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: SettlementStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sport.is_none() && self.league.is_none() && self.status.is_none()
    }

    fn leg_matches(&self, leg: &BetLeg) -> bool {
        self.sport.as_deref().map_or(true, |s| leg.sport() == s)
            && self.league.as_deref().map_or(true, |l| leg.league() == l)
            && self.status.map_or(true, |s| leg.status() == s)
    }

    #[must_use]
    pub fn matches(&self, bet: &Bet) -> bool {
        self.is_empty() || bet.legs().iter().any(|leg| self.leg_matches(leg))
    }

    /// Matching bets, in their original order.
    #[must_use]
    pub fn apply(&self, bets: &[Bet]) -> Vec<Bet> {
        bets.iter().filter(|bet| self.matches(bet)).cloned().collect()
    }
}

/// Distinct values present in a bet list, for building filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BetFacets {
    pub sports: Vec<String>,
    pub leagues: Vec<String>,
    pub statuses: Vec<SettlementStatus>,
}

impl BetFacets {
    /// Collect sorted, de-duplicated sports, leagues and leg statuses.
    pub fn collect(bets: &[Bet]) -> Self {
        let mut sports = BTreeSet::new();
        let mut leagues = BTreeSet::new();
        let mut statuses = BTreeSet::new();

        for leg in bets.iter().flat_map(Bet::legs) {
            sports.insert(leg.sport().to_string());
            leagues.insert(leg.league().to_string());
            statuses.insert(leg.status());
        }

        Self {
            sports: sports.into_iter().collect(),
            leagues: leagues.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
        }
    }
}
