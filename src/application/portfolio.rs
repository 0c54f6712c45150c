//! Portfolio aggregation over a user's bet history.
//!
//! All statistics are computed over settled bets. A bet whose profit cannot
//! be evaluated (malformed odds, missing cashout value) is skipped and
//! reported instead of failing the whole aggregate. Pending stake is kept
//! separate from the settled totals.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::money::round_cents;
use crate::domain::settlement::{evaluate_bet, Outcome};
use crate::domain::stats::{DailyProfit, PortfolioReport, PortfolioSummary, SkippedBet};
use crate::domain::{Bet, DomainError, Money, SettlementStatus};

/// A settled bet with its evaluated profit.
#[derive(Debug, Clone, Copy)]
pub struct SettledBet<'a> {
    pub bet: &'a Bet,
    pub status: SettlementStatus,
    pub profit: Money,
}

/// A bet collection split into settled, pending and skipped records.
///
/// Totals are accumulated with checked arithmetic as bets are admitted. A
/// bet that would push a total out of range is skipped like any other
/// unevaluable record, so every sum over the admitted bets fits.
#[derive(Debug, Clone, Default)]
pub struct Evaluation<'a> {
    pub settled: Vec<SettledBet<'a>>,
    pub pending: Vec<&'a Bet>,
    pub skipped: Vec<SkippedBet>,
    staked: Money,
    profit: Money,
    exposure: Money,
    pending_stake: Money,
}

impl<'a> Evaluation<'a> {
    /// Split `bets` by evaluation result.
    pub fn of(bets: &'a [Bet]) -> Self {
        let mut evaluation = Self::default();

        for bet in bets {
            let admitted = evaluate_bet(bet).and_then(|outcome| evaluation.admit(bet, outcome));
            if let Err(error) = admitted {
                warn!(bet_id = %bet.id(), error = %error, "Skipping bet in aggregate");
                evaluation.skipped.push(SkippedBet {
                    bet_id: bet.id().clone(),
                    reason: error.to_string(),
                });
            }
        }

        debug!(
            settled = evaluation.settled.len(),
            pending = evaluation.pending.len(),
            skipped = evaluation.skipped.len(),
            "Evaluated bets"
        );
        evaluation
    }

    fn admit(&mut self, bet: &'a Bet, outcome: Outcome) -> Result<(), DomainError> {
        let overflow = || DomainError::AmountOutOfRange;

        match outcome {
            Outcome::Settled(profit) => {
                let staked = self.staked.checked_add(bet.stake()).ok_or_else(overflow)?;
                let total = self.profit.checked_add(profit).ok_or_else(overflow)?;
                let exposure = self.exposure.checked_add(profit.abs()).ok_or_else(overflow)?;
                self.staked = staked;
                self.profit = total;
                self.exposure = exposure;
                self.settled.push(SettledBet {
                    bet,
                    status: bet.status(),
                    profit,
                });
            }
            Outcome::Unsettled => {
                self.pending_stake = self
                    .pending_stake
                    .checked_add(bet.stake())
                    .ok_or_else(overflow)?;
                self.pending.push(bet);
            }
        }
        Ok(())
    }

    fn count(&self, status: SettlementStatus) -> usize {
        self.settled.iter().filter(|s| s.status == status).count()
    }

    /// Won bets as a percentage of settled bets; 0 when nothing settled.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.settled.is_empty() {
            return 0.0;
        }
        self.count(SettlementStatus::Won) as f64 / self.settled.len() as f64 * 100.0
    }

    #[must_use]
    pub fn total_staked(&self) -> Money {
        self.staked
    }

    #[must_use]
    pub fn total_profit(&self) -> Money {
        self.profit
    }

    /// Mean settled stake, rounded to cents; 0 when nothing settled.
    #[must_use]
    pub fn average_stake(&self) -> Money {
        if self.settled.is_empty() {
            return Decimal::ZERO;
        }
        round_cents(self.total_staked() / Decimal::from(self.settled.len()))
    }

    #[must_use]
    pub fn pending_stake(&self) -> Money {
        self.pending_stake
    }

    /// Net profit per calendar day of placement in `tz`, ascending.
    ///
    /// Days without a settled bet are absent rather than zero-filled.
    pub fn daily_profit<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DailyProfit> {
        let mut by_day: BTreeMap<NaiveDate, (Money, usize)> = BTreeMap::new();

        for settled in &self.settled {
            let date = settled.bet.placed_at().with_timezone(tz).date_naive();
            let entry = by_day.entry(date).or_insert((Decimal::ZERO, 0));
            // Bounded by the admitted exposure.
            entry.0 += settled.profit;
            entry.1 += 1;
        }

        by_day
            .into_iter()
            .map(|(date, (net_profit, bet_count))| DailyProfit {
                date,
                net_profit,
                bet_count,
            })
            .collect()
    }
}

/// Aggregates bet collections into portfolio statistics.
///
/// The timezone decides which calendar day a bet belongs to in the daily
/// series; pass the user's zone rather than relying on ambient state.
#[derive(Debug, Clone)]
pub struct BetAggregator<Tz: TimeZone = Utc> {
    tz: Tz,
}

impl BetAggregator<Utc> {
    /// Aggregator bucketing days in UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self { tz: Utc }
    }
}

impl<Tz: TimeZone> BetAggregator<Tz> {
    /// Create an aggregator bucketing days in `tz`.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn evaluate<'a>(&self, bets: &'a [Bet]) -> Evaluation<'a> {
        Evaluation::of(bets)
    }

    pub fn win_rate(&self, bets: &[Bet]) -> f64 {
        Evaluation::of(bets).win_rate()
    }

    pub fn total_staked(&self, bets: &[Bet]) -> Money {
        Evaluation::of(bets).total_staked()
    }

    pub fn total_profit(&self, bets: &[Bet]) -> Money {
        Evaluation::of(bets).total_profit()
    }

    pub fn average_stake(&self, bets: &[Bet]) -> Money {
        Evaluation::of(bets).average_stake()
    }

    pub fn daily_profit_series(&self, bets: &[Bet]) -> Vec<DailyProfit> {
        Evaluation::of(bets).daily_profit(&self.tz)
    }

    /// Full summary in one evaluation pass.
    pub fn summarize(&self, bets: &[Bet]) -> PortfolioReport {
        let evaluation = Evaluation::of(bets);

        let summary = PortfolioSummary {
            total_bets: evaluation.settled.len() + evaluation.pending.len(),
            settled_bets: evaluation.settled.len(),
            won_bets: evaluation.count(SettlementStatus::Won),
            lost_bets: evaluation.count(SettlementStatus::Lost),
            win_rate: evaluation.win_rate(),
            total_staked: evaluation.total_staked(),
            total_profit: evaluation.total_profit(),
            average_stake: evaluation.average_stake(),
            pending_bets: evaluation.pending.len(),
            pending_stake: evaluation.pending_stake(),
            daily: evaluation.daily_profit(&self.tz),
        };

        PortfolioReport {
            summary,
            skipped: evaluation.skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OddsNotation;
    use crate::testkit::domain::{at, parlay_bet, single_bet};
    use chrono::FixedOffset;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_collection_yields_zeros() {
        let aggregator = BetAggregator::utc();
        assert_eq!(aggregator.win_rate(&[]), 0.0);
        assert_eq!(aggregator.average_stake(&[]), dec!(0));
        assert_eq!(aggregator.total_staked(&[]), dec!(0));
        assert_eq!(aggregator.total_profit(&[]), dec!(0));
        assert!(aggregator.daily_profit_series(&[]).is_empty());
    }

    #[test]
    fn win_rate_over_settled_only() {
        let bets = vec![
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Won, at(2024, 3, 1, 12)),
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Lost, at(2024, 3, 1, 12)),
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Pending, at(2024, 3, 1, 12)),
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Void, at(2024, 3, 1, 12)),
        ];
        let rate = BetAggregator::utc().win_rate(&bets);
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn pending_stake_kept_apart_from_settled_total() {
        let bets = vec![
            single_bet(dec!(25), "-110", OddsNotation::American, SettlementStatus::Lost, at(2024, 3, 1, 12)),
            single_bet(dec!(40), "-110", OddsNotation::American, SettlementStatus::Pending, at(2024, 3, 1, 12)),
        ];
        let report = BetAggregator::utc().summarize(&bets);
        assert_eq!(report.summary.total_staked, dec!(25));
        assert_eq!(report.summary.pending_stake, dec!(40));
        assert_eq!(report.summary.pending_bets, 1);
        assert_eq!(report.summary.total_bets, 2);
    }

    #[test]
    fn malformed_bet_is_skipped_not_fatal() {
        let bets = vec![
            single_bet(dec!(100), "+150", OddsNotation::American, SettlementStatus::Won, at(2024, 3, 1, 12)),
            single_bet(dec!(100), "garbage", OddsNotation::American, SettlementStatus::Won, at(2024, 3, 1, 12)),
        ];
        let report = BetAggregator::utc().summarize(&bets);
        assert_eq!(report.summary.settled_bets, 1);
        assert_eq!(report.summary.total_profit, dec!(150.00));
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].bet_id, bets[1].id().clone());
    }

    #[test]
    fn overflowing_parlay_is_skipped_not_fatal() {
        let huge = "10000000000";
        let won = SettlementStatus::Won;
        let bets = vec![
            single_bet(dec!(100), "2.5", OddsNotation::Decimal, won, at(2024, 3, 1, 12)),
            parlay_bet(dec!(10), &[(huge, won), (huge, won), (huge, won)], at(2024, 3, 1, 12)),
        ];
        let report = BetAggregator::utc().summarize(&bets);
        assert_eq!(report.summary.settled_bets, 1);
        assert_eq!(report.summary.total_profit, dec!(150.00));
        assert_eq!(report.skipped[0].bet_id, bets[1].id().clone());
        assert_eq!(report.skipped[0].reason, DomainError::AmountOutOfRange.to_string());
    }

    #[test]
    fn cashout_without_value_is_skipped() {
        let placed = at(2024, 3, 1, 12);
        let cashed = Bet::builder()
            .stake(dec!(40))
            .leg(crate::testkit::domain::leg("+200", OddsNotation::American, SettlementStatus::Pending, placed))
            .cashout(true, None)
            .restore(dec!(120), placed)
            .unwrap();
        let bets = vec![
            single_bet(dec!(50), "+150", OddsNotation::American, SettlementStatus::Lost, placed),
            cashed,
        ];
        let report = BetAggregator::utc().summarize(&bets);
        assert_eq!(report.summary.settled_bets, 1);
        assert_eq!(report.summary.total_staked, dec!(50));
        assert_eq!(report.summary.pending_bets, 0);
        assert_eq!(report.skipped[0].reason, DomainError::MissingCashoutValue.to_string());
    }

    #[test]
    fn average_stake_rounds_to_cents() {
        let bets = vec![
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Lost, at(2024, 3, 1, 12)),
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Lost, at(2024, 3, 1, 12)),
            single_bet(dec!(11), "2.0", OddsNotation::Decimal, SettlementStatus::Lost, at(2024, 3, 1, 12)),
        ];
        assert_eq!(BetAggregator::utc().average_stake(&bets), dec!(10.33));
    }

    #[test]
    fn daily_series_is_sparse_and_ascending() {
        let bets = vec![
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Won, at(2024, 3, 5, 9)),
            single_bet(dec!(10), "2.0", OddsNotation::Decimal, SettlementStatus::Lost, at(2024, 3, 1, 9)),
            single_bet(dec!(30), "3.0", OddsNotation::Decimal, SettlementStatus::Won, at(2024, 3, 5, 20)),
            single_bet(dec!(99), "2.0", OddsNotation::Decimal, SettlementStatus::Pending, at(2024, 3, 3, 9)),
        ];
        let series = BetAggregator::utc().daily_profit_series(&bets);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(series[0].net_profit, dec!(-10));
        assert_eq!(series[1].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(series[1].net_profit, dec!(70));
        assert_eq!(series[1].bet_count, 2);
    }

    #[test]
    fn daily_series_buckets_in_user_timezone() {
        // 23:30 UTC on the 1st is already the 2nd in UTC+2.
        let bets = vec![single_bet(
            dec!(10),
            "2.0",
            OddsNotation::Decimal,
            SettlementStatus::Won,
            at(2024, 3, 1, 23) + chrono::Duration::minutes(30),
        )];
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let series = BetAggregator::new(offset).daily_profit_series(&bets);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn parlay_profit_flows_into_totals() {
        let bets = vec![parlay_bet(
            dec!(20),
            &[("1.91", SettlementStatus::Won), ("2.0", SettlementStatus::Won)],
            at(2024, 3, 1, 12),
        )];
        let aggregator = BetAggregator::utc();
        assert_eq!(aggregator.total_profit(&bets), dec!(56.40));
        assert_eq!(aggregator.win_rate(&bets), 100.0);
    }

    #[test]
    fn summarize_is_idempotent() {
        let bets = vec![
            single_bet(dec!(100), "-110", OddsNotation::American, SettlementStatus::Won, at(2024, 3, 1, 12)),
            single_bet(dec!(50), "+120", OddsNotation::American, SettlementStatus::Lost, at(2024, 3, 2, 12)),
        ];
        let aggregator = BetAggregator::utc();
        assert_eq!(aggregator.summarize(&bets), aggregator.summarize(&bets));
    }
}
