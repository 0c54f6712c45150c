//! Bets and their legs.
//!
//! A [`Bet`] is one or more [`BetLeg`]s placed together with a single stake.
//! Use [`Bet::builder`] to place new bets (validating input and pricing the
//! potential payout) or to restore stored ones (keeping the stored payout).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{BetId, LegId};
use super::money::{round_cents, Money};
use super::odds::Odds;
use super::status::SettlementStatus;

/// One selection within a bet.
#[derive(Debug, Clone, PartialEq)]
pub struct BetLeg {
    id: LegId,
    sport: String,
    league: String,
    event_name: String,
    selection: String,
    odds: Odds,
    status: SettlementStatus,
    event_start: DateTime<Utc>,
    event_end: Option<DateTime<Utc>>,
}

impl BetLeg {
    /// Create a pending leg with a fresh identifier.
    pub fn new(
        sport: impl Into<String>,
        league: impl Into<String>,
        event_name: impl Into<String>,
        selection: impl Into<String>,
        odds: Odds,
        event_start: DateTime<Utc>,
    ) -> Self {
        Self {
            id: LegId::generate(),
            sport: sport.into(),
            league: league.into(),
            event_name: event_name.into(),
            selection: selection.into(),
            odds,
            status: SettlementStatus::Pending,
            event_start,
            event_end: None,
        }
    }

    /// Replace the generated identifier with a stored one.
    #[must_use]
    pub fn with_id(mut self, id: LegId) -> Self {
        self.id = id;
        self
    }

    /// Set the recorded status, as when restoring a stored leg.
    #[must_use]
    pub fn with_status(mut self, status: SettlementStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_event_end(mut self, event_end: DateTime<Utc>) -> Self {
        self.event_end = Some(event_end);
        self
    }

    /// Record the outcome of this leg.
    ///
    /// Won, Lost and Void are final; settling an already-final leg to a
    /// different status fails with [`DomainError::AlreadySettled`].
    pub fn settle(&mut self, status: SettlementStatus) -> Result<(), DomainError> {
        if self.status.is_terminal() && self.status != status {
            return Err(DomainError::AlreadySettled {
                current: self.status,
                requested: status,
            });
        }
        self.status = status;
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &LegId {
        &self.id
    }

    #[must_use]
    pub fn sport(&self) -> &str {
        &self.sport
    }

    #[must_use]
    pub fn league(&self) -> &str {
        &self.league
    }

    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    #[must_use]
    pub fn selection(&self) -> &str {
        &self.selection
    }

    #[must_use]
    pub fn odds(&self) -> &Odds {
        &self.odds
    }

    #[must_use]
    pub fn status(&self) -> SettlementStatus {
        self.status
    }

    #[must_use]
    pub fn event_start(&self) -> DateTime<Utc> {
        self.event_start
    }

    #[must_use]
    pub fn event_end(&self) -> Option<DateTime<Utc>> {
        self.event_end
    }
}

/// Single selection or accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetKind {
    Single,
    Parlay,
}

impl BetKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Parlay => "Parlay",
        }
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "parlay" | "accumulator" | "multi" => Ok(Self::Parlay),
            _ => Err(DomainError::UnknownBetKind(s.to_string())),
        }
    }
}

/// One or more legs placed together with a single stake.
///
/// `potential_payout` is priced once at placement and never recomputed, so
/// it reflects the price taken even if the displayed notation changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    id: BetId,
    bookmaker: String,
    kind: BetKind,
    stake: Money,
    potential_payout: Money,
    placed_at: DateTime<Utc>,
    settled_at: Option<DateTime<Utc>>,
    is_cashout: bool,
    cashout_value: Option<Money>,
    legs: Vec<BetLeg>,
}

impl Bet {
    /// Create a new builder for placing or restoring a bet.
    pub fn builder() -> BetBuilder {
        BetBuilder::new()
    }

    #[must_use]
    pub fn id(&self) -> &BetId {
        &self.id
    }

    #[must_use]
    pub fn bookmaker(&self) -> &str {
        &self.bookmaker
    }

    #[must_use]
    pub fn kind(&self) -> BetKind {
        self.kind
    }

    #[must_use]
    pub fn stake(&self) -> Money {
        self.stake
    }

    /// Total return if every leg wins, priced at placement.
    #[must_use]
    pub fn potential_payout(&self) -> Money {
        self.potential_payout
    }

    #[must_use]
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    #[must_use]
    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.settled_at
    }

    #[must_use]
    pub fn is_cashout(&self) -> bool {
        self.is_cashout
    }

    #[must_use]
    pub fn cashout_value(&self) -> Option<Money> {
        self.cashout_value
    }

    #[must_use]
    pub fn legs(&self) -> &[BetLeg] {
        &self.legs
    }

    /// Mutable access to a leg for settlement.
    pub fn leg_mut(&mut self, id: &LegId) -> Option<&mut BetLeg> {
        self.legs.iter_mut().find(|leg| leg.id() == id)
    }

    /// Mark the bet as cashed out at the given value.
    pub fn cash_out(&mut self, value: Money, at: DateTime<Utc>) {
        self.is_cashout = true;
        self.cashout_value = Some(value);
        self.settled_at = Some(at);
    }

    /// Overall status derived from the legs.
    ///
    /// A cashed-out bet is `Cashout`. Otherwise void legs drop out and the
    /// rest combine: any `Lost` leg loses the bet, any cashed-out leg
    /// settles it as `Cashout`, any `Pending` leg keeps it pending, and only
    /// when every remaining leg won is the bet `Won`. A bet whose legs are
    /// all void is `Void`. For single bets this mirrors the leg.
    #[must_use]
    pub fn status(&self) -> SettlementStatus {
        if self.is_cashout {
            return SettlementStatus::Cashout;
        }
        combine_leg_statuses(self.legs.iter().map(BetLeg::status))
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.status().is_settled()
    }
}

/// Combine leg statuses into a bet status using accumulator rules.
#[must_use]
pub fn combine_leg_statuses(statuses: impl IntoIterator<Item = SettlementStatus>) -> SettlementStatus {
    let mut any_cashout = false;
    let mut any_pending = false;
    let mut any_won = false;

    for status in statuses {
        match status {
            SettlementStatus::Lost => return SettlementStatus::Lost,
            SettlementStatus::Cashout => any_cashout = true,
            SettlementStatus::Pending => any_pending = true,
            SettlementStatus::Won => any_won = true,
            SettlementStatus::Void => {}
        }
    }

    if any_cashout {
        SettlementStatus::Cashout
    } else if any_pending {
        SettlementStatus::Pending
    } else if any_won {
        SettlementStatus::Won
    } else {
        SettlementStatus::Void
    }
}

/// Total return on `stake` if every leg wins: the stake times the product
/// of the leg multipliers, rounded to cents.
///
/// # Errors
///
/// [`DomainError::NonPositiveStake`] for a stake of zero or less, the
/// first odds error among the legs, or [`DomainError::AmountOutOfRange`]
/// when the payout does not fit.
pub fn price_payout<'a>(
    stake: Money,
    odds: impl IntoIterator<Item = &'a Odds>,
) -> Result<Money, DomainError> {
    if stake <= Decimal::ZERO {
        return Err(DomainError::NonPositiveStake { stake });
    }
    let combined = combined_price(odds)?;
    stake
        .checked_mul(combined)
        .map(round_cents)
        .ok_or(DomainError::AmountOutOfRange)
}

/// Product of the leg multipliers.
///
/// # Errors
///
/// The first odds error among the legs, or
/// [`DomainError::AmountOutOfRange`] when the product does not fit.
pub fn combined_price<'a>(odds: impl IntoIterator<Item = &'a Odds>) -> Result<Decimal, DomainError> {
    odds.into_iter().try_fold(Decimal::ONE, |acc, odds| {
        acc.checked_mul(odds.multiplier()?)
            .ok_or(DomainError::AmountOutOfRange)
    })
}

/// Builder for constructing [`Bet`] instances.
///
/// # Example
///
/// ```
/// use betledger::domain::bet::{Bet, BetKind, BetLeg};
/// use betledger::domain::odds::{Odds, OddsNotation};
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let leg = BetLeg::new(
///     "Hockey",
///     "NHL",
///     "Bruins @ Leafs",
///     "Bruins",
///     Odds::parse("-110", OddsNotation::American).unwrap(),
///     Utc::now(),
/// );
/// let bet = Bet::builder()
///     .bookmaker("Bet365")
///     .kind(BetKind::Single)
///     .stake(dec!(100))
///     .leg(leg)
///     .place(Utc::now())
///     .unwrap();
/// assert_eq!(bet.potential_payout(), dec!(190.91));
/// ```
#[derive(Debug, Default)]
pub struct BetBuilder {
    id: Option<BetId>,
    bookmaker: Option<String>,
    kind: Option<BetKind>,
    stake: Option<Money>,
    legs: Vec<BetLeg>,
    settled_at: Option<DateTime<Utc>>,
    is_cashout: bool,
    cashout_value: Option<Money>,
}

impl BetBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a stored identifier instead of generating one.
    #[must_use]
    pub fn id(mut self, id: BetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn bookmaker(mut self, bookmaker: impl Into<String>) -> Self {
        self.bookmaker = Some(bookmaker.into());
        self
    }

    /// Set the bet kind. Defaults to `Single` for one leg, `Parlay` otherwise.
    #[must_use]
    pub fn kind(mut self, kind: BetKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn stake(mut self, stake: Money) -> Self {
        self.stake = Some(stake);
        self
    }

    #[must_use]
    pub fn leg(mut self, leg: BetLeg) -> Self {
        self.legs.push(leg);
        self
    }

    #[must_use]
    pub fn legs(mut self, legs: impl IntoIterator<Item = BetLeg>) -> Self {
        self.legs.extend(legs);
        self
    }

    #[must_use]
    pub fn settled_at(mut self, settled_at: Option<DateTime<Utc>>) -> Self {
        self.settled_at = settled_at;
        self
    }

    /// Record the cashout flag and value as stored.
    #[must_use]
    pub fn cashout(mut self, is_cashout: bool, value: Option<Money>) -> Self {
        self.is_cashout = is_cashout;
        self.cashout_value = value;
        self
    }

    /// Place a new bet, pricing the potential payout from the leg odds.
    ///
    /// Every leg's odds must parse; the payout is the stake times the
    /// product of the leg multipliers, rounded to cents.
    pub fn place(self, placed_at: DateTime<Utc>) -> Result<Bet, DomainError> {
        let stake = self.validated_stake()?;
        let potential_payout = price_payout(stake, self.legs.iter().map(BetLeg::odds))?;
        self.build(stake, potential_payout, placed_at)
    }

    /// Restore a stored bet, keeping its recorded potential payout.
    pub fn restore(
        self,
        potential_payout: Money,
        placed_at: DateTime<Utc>,
    ) -> Result<Bet, DomainError> {
        let stake = self.validated_stake()?;
        self.build(stake, potential_payout, placed_at)
    }

    fn validated_stake(&self) -> Result<Money, DomainError> {
        let stake = self.stake.unwrap_or(Decimal::ZERO);
        if stake <= Decimal::ZERO {
            return Err(DomainError::NonPositiveStake { stake });
        }
        Ok(stake)
    }

    fn build(
        self,
        stake: Money,
        potential_payout: Money,
        placed_at: DateTime<Utc>,
    ) -> Result<Bet, DomainError> {
        let count = self.legs.len();
        if count == 0 {
            return Err(DomainError::EmptyLegs);
        }

        let kind = self.kind.unwrap_or(if count == 1 {
            BetKind::Single
        } else {
            BetKind::Parlay
        });
        match kind {
            BetKind::Single if count != 1 => return Err(DomainError::SingleLegCount { count }),
            BetKind::Parlay if count < 2 => return Err(DomainError::ParlayLegCount { count }),
            _ => {}
        }

        Ok(Bet {
            id: self.id.unwrap_or_else(BetId::generate),
            bookmaker: self.bookmaker.unwrap_or_default(),
            kind,
            stake,
            potential_payout,
            placed_at,
            settled_at: self.settled_at,
            is_cashout: self.is_cashout,
            cashout_value: self.cashout_value,
            legs: self.legs,
        })
    }
}
