//! Domain validation errors for odds, legs, and bets.
//!
//! Every error here is local and recoverable. Single-value operations
//! (conversion, leg evaluation) return them directly; portfolio aggregation
//! collects them per bet and keeps going.
//!
//! # Examples
//!
//! ```
//! use betledger::domain::error::DomainError;
//! use betledger::domain::odds::{to_decimal_multiplier, OddsNotation};
//!
//! let result = to_decimal_multiplier("0.95", OddsNotation::Decimal);
//! assert!(matches!(result, Err(DomainError::InvalidOddsValue { .. })));
//! ```

use thiserror::Error;

use super::odds::OddsNotation;
use super::status::SettlementStatus;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The odds string does not follow the grammar of its notation.
    #[error("malformed {notation} odds '{odds}'")]
    InvalidOddsFormat {
        /// The rejected input.
        odds: String,
        /// The notation the input was declared in.
        notation: OddsNotation,
    },

    /// The odds parsed but lie outside the valid range.
    #[error("invalid odds value '{odds}': {reason}")]
    InvalidOddsValue {
        /// The rejected input.
        odds: String,
        /// Why the value is out of range.
        reason: String,
    },

    /// A cashed-out bet has no recorded cashout value.
    #[error("cashout status without a recorded cashout value")]
    MissingCashoutValue,

    /// A stake, payout or combined price exceeds the representable range.
    #[error("amount out of range")]
    AmountOutOfRange,

    /// Profit was requested for a leg or bet that has not settled.
    #[error("leg is not settled yet")]
    UnsettledLeg,

    /// A leg already in a terminal state cannot be re-settled.
    #[error("leg already settled as {current}, cannot change to {requested}")]
    AlreadySettled {
        current: SettlementStatus,
        requested: SettlementStatus,
    },

    /// Bets must have at least one leg.
    #[error("legs cannot be empty")]
    EmptyLegs,

    /// Stake must be strictly positive.
    #[error("stake must be positive, got {stake}")]
    NonPositiveStake { stake: rust_decimal::Decimal },

    /// Single bets carry exactly one leg.
    #[error("single bet must have exactly one leg, got {count}")]
    SingleLegCount { count: usize },

    /// Parlays combine at least two legs.
    #[error("parlay must have at least two legs, got {count}")]
    ParlayLegCount { count: usize },

    #[error("unknown settlement status '{0}'")]
    UnknownStatus(String),

    #[error("unknown odds notation '{0}'")]
    UnknownNotation(String),

    #[error("unknown bet type '{0}'")]
    UnknownBetKind(String),
}

impl DomainError {
    pub(crate) fn invalid_format(odds: &str, notation: OddsNotation) -> Self {
        Self::InvalidOddsFormat {
            odds: odds.to_string(),
            notation,
        }
    }

    pub(crate) fn invalid_value(odds: &str, reason: impl Into<String>) -> Self {
        Self::InvalidOddsValue {
            odds: odds.to_string(),
            reason: reason.into(),
        }
    }
}
