//! Profit and loss of settled legs and bets.
//!
//! Profit is net of stake: a winning bet at `2.50` for `100` returns `250`
//! and profits `150`. Results are rounded to cents.
//!
//! Arithmetic is checked: a price or stake too large to represent yields
//! [`DomainError::AmountOutOfRange`] instead of a panic.

use rust_decimal::Decimal;

use super::bet::Bet;
use super::error::DomainError;
use super::money::{round_cents, Money};
use super::odds::Odds;
use super::status::SettlementStatus;

/// Result of evaluating a leg or bet: a profit once settled, or a marker
/// that the outcome is still unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Settled(Money),
    Unsettled,
}

impl Outcome {
    /// The settled profit, if any.
    #[must_use]
    pub fn profit(self) -> Option<Money> {
        match self {
            Self::Settled(profit) => Some(profit),
            Self::Unsettled => None,
        }
    }
}

/// Evaluate a leg placed at `stake`.
///
/// Legs carry no stake of their own; pass the bet's stake.
///
/// # Errors
///
/// Odds errors for `Won` legs, [`DomainError::MissingCashoutValue`] for a
/// `Cashout` leg without a value, [`DomainError::AmountOutOfRange`] when the
/// profit does not fit.
pub fn evaluate_leg(
    stake: Money,
    odds: &Odds,
    status: SettlementStatus,
    cashout_value: Option<Money>,
) -> Result<Outcome, DomainError> {
    let profit = match status {
        SettlementStatus::Pending => return Ok(Outcome::Unsettled),
        SettlementStatus::Won => win_profit(stake, odds.multiplier()?)?,
        SettlementStatus::Lost => -stake,
        SettlementStatus::Void => Decimal::ZERO,
        SettlementStatus::Cashout => cashout_profit(stake, cashout_value)?,
    };
    Ok(Outcome::Settled(round_cents(profit)))
}

/// Profit of a settled leg.
///
/// Same as [`evaluate_leg`] but a pending leg is an error
/// ([`DomainError::UnsettledLeg`]) rather than a tagged result.
pub fn leg_profit(
    stake: Money,
    odds: &Odds,
    status: SettlementStatus,
    cashout_value: Option<Money>,
) -> Result<Money, DomainError> {
    evaluate_leg(stake, odds, status, cashout_value)?
        .profit()
        .ok_or(DomainError::UnsettledLeg)
}

/// Evaluate a whole bet.
///
/// Single bets evaluate their one leg under the bet's status. Parlays drop
/// void legs and compose the rest: a win pays
/// `stake × (Π multipliers − 1)`, a loss costs the stake, an all-void
/// parlay returns the stake.
pub fn evaluate_bet(bet: &Bet) -> Result<Outcome, DomainError> {
    let status = bet.status();

    if let [leg] = bet.legs() {
        return evaluate_leg(bet.stake(), leg.odds(), status, bet.cashout_value());
    }

    let stake = bet.stake();
    let profit = match status {
        SettlementStatus::Pending => return Ok(Outcome::Unsettled),
        SettlementStatus::Won => win_profit(stake, combined_multiplier(bet)?)?,
        SettlementStatus::Lost => -stake,
        SettlementStatus::Void => Decimal::ZERO,
        SettlementStatus::Cashout => cashout_profit(stake, bet.cashout_value())?,
    };
    Ok(Outcome::Settled(round_cents(profit)))
}

/// Profit of a settled bet; a pending bet is [`DomainError::UnsettledLeg`].
pub fn bet_profit(bet: &Bet) -> Result<Money, DomainError> {
    evaluate_bet(bet)?.profit().ok_or(DomainError::UnsettledLeg)
}

/// Product of the multipliers of every non-void leg.
pub fn combined_multiplier(bet: &Bet) -> Result<Decimal, DomainError> {
    bet.legs()
        .iter()
        .filter(|leg| leg.status() != SettlementStatus::Void)
        .try_fold(Decimal::ONE, |acc, leg| {
            acc.checked_mul(leg.odds().multiplier()?)
                .ok_or(DomainError::AmountOutOfRange)
        })
}

fn win_profit(stake: Money, multiplier: Decimal) -> Result<Money, DomainError> {
    stake
        .checked_mul(multiplier - Decimal::ONE)
        .ok_or(DomainError::AmountOutOfRange)
}

fn cashout_profit(stake: Money, cashout_value: Option<Money>) -> Result<Money, DomainError> {
    cashout_value
        .ok_or(DomainError::MissingCashoutValue)?
        .checked_sub(stake)
        .ok_or(DomainError::AmountOutOfRange)
}
