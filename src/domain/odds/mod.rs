//! Odds notations and conversion between them.
//!
//! Every conversion passes through the decimal multiplier: the factor applied
//! to a stake to obtain the total return on a win, stake included. American
//! `-110`, decimal `1.91` and fractional `10/11` all describe (roughly) the
//! same multiplier.
//!
//! # Examples
//!
//! ```
//! use betledger::domain::odds::{convert, to_decimal_multiplier, OddsNotation};
//! use rust_decimal_macros::dec;
//!
//! let m = to_decimal_multiplier("+150", OddsNotation::American).unwrap();
//! assert_eq!(m, dec!(2.5));
//!
//! let fractional = convert("-110", OddsNotation::American, OddsNotation::Fractional).unwrap();
//! assert_eq!(fractional, "10/11");
//! ```

mod fractional;

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

pub use fractional::{best_fit_fraction, CanonicalFraction, CANONICAL_FRACTIONS, MAX_DENOMINATOR};

/// Placeholder shown in place of odds that cannot be parsed.
pub const ODDS_PLACEHOLDER: &str = "N/A";

const MIN_DECIMAL_PLACES: u32 = 2;
const MAX_DECIMAL_PLACES: u32 = 10;
const MIN_AMERICAN_MAGNITUDE: u64 = 100;

/// Display convention for odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddsNotation {
    /// Moneyline: `+150`, `-110`.
    American,
    /// European: `2.50`, `1.91`.
    #[serde(alias = "european")]
    Decimal,
    /// UK: `3/2`, `10/11`.
    Fractional,
}

impl OddsNotation {
    /// All notations in display order.
    pub const ALL: [Self; 3] = [Self::Decimal, Self::Fractional, Self::American];

    /// Lowercase name as stored in the odds type reference table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::American => "american",
            Self::Decimal => "decimal",
            Self::Fractional => "fractional",
        }
    }

    /// Sample rendering of a typical line, for pickers.
    #[must_use]
    pub const fn example(self) -> &'static str {
        match self {
            Self::American => "-110",
            Self::Decimal => "1.91",
            Self::Fractional => "10/11",
        }
    }
}

impl fmt::Display for OddsNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OddsNotation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" | "moneyline" => Ok(Self::American),
            "decimal" | "european" => Ok(Self::Decimal),
            "fractional" => Ok(Self::Fractional),
            _ => Err(DomainError::UnknownNotation(s.to_string())),
        }
    }
}

/// An odds value as recorded: the raw string plus its declared notation.
///
/// Construction through [`Odds::new`] does not validate, so that stored
/// records with malformed odds can still be loaded and reported on. Use
/// [`Odds::parse`] when accepting new input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Odds {
    value: String,
    notation: OddsNotation,
}

impl Odds {
    /// Wrap a recorded odds value without validating it.
    pub fn new(value: impl Into<String>, notation: OddsNotation) -> Self {
        Self {
            value: value.into(),
            notation,
        }
    }

    /// Validate and wrap an odds value.
    pub fn parse(value: impl Into<String>, notation: OddsNotation) -> Result<Self, DomainError> {
        let odds = Self::new(value, notation);
        odds.multiplier()?;
        Ok(odds)
    }

    /// The raw odds string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The notation the value is written in.
    #[must_use]
    pub fn notation(&self) -> OddsNotation {
        self.notation
    }

    /// Total-return multiplier of this price.
    pub fn multiplier(&self) -> Result<Decimal, DomainError> {
        to_decimal_multiplier(&self.value, self.notation)
    }

    /// Render this price in another notation.
    pub fn convert_to(&self, to: OddsNotation) -> Result<String, DomainError> {
        convert(&self.value, self.notation, to)
    }

    /// Render this price in another notation, or the placeholder if malformed.
    #[must_use]
    pub fn display_as(&self, to: OddsNotation) -> String {
        display_odds(&self.value, self.notation, to)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Factor by which a stake is multiplied to get the total return on a win.
///
/// # Errors
///
/// [`DomainError::InvalidOddsFormat`] when the string does not match the
/// notation's grammar, [`DomainError::InvalidOddsValue`] when it parses but
/// the price is impossible (American `0` or `|v| < 100`, decimal `<= 1.0`,
/// fractional with a zero numerator or denominator).
pub fn to_decimal_multiplier(odds: &str, notation: OddsNotation) -> Result<Decimal, DomainError> {
    match notation {
        OddsNotation::American => american_multiplier(odds),
        OddsNotation::Decimal => decimal_multiplier(odds),
        OddsNotation::Fractional => fractional::multiplier(odds),
    }
}

/// Convert an odds string from one notation to another.
///
/// American output is rounded to the nearest whole line and signed
/// (`+150`, `-110`). Decimal output uses two places, extended only as far as
/// needed for the American line to be recoverable from it unchanged.
/// Fractional output is a display heuristic, see [`best_fit_fraction`].
pub fn convert(odds: &str, from: OddsNotation, to: OddsNotation) -> Result<String, DomainError> {
    let multiplier = to_decimal_multiplier(odds, from)?;
    format_multiplier(multiplier, to)
}

/// Convert for display: malformed input renders as [`ODDS_PLACEHOLDER`].
#[must_use]
pub fn display_odds(odds: &str, from: OddsNotation, to: OddsNotation) -> String {
    convert(odds, from, to).unwrap_or_else(|_| ODDS_PLACEHOLDER.to_string())
}

/// Render a total-return multiplier in the given notation.
pub fn format_multiplier(multiplier: Decimal, notation: OddsNotation) -> Result<String, DomainError> {
    if multiplier <= Decimal::ONE {
        return Err(DomainError::invalid_value(
            &multiplier.to_string(),
            "multiplier must exceed 1.0",
        ));
    }
    match notation {
        OddsNotation::American => {
            let line = american_line(multiplier)?;
            Ok(if line > 0 {
                format!("+{line}")
            } else {
                line.to_string()
            })
        }
        OddsNotation::Decimal => Ok(format_decimal(multiplier)),
        OddsNotation::Fractional => Ok(fractional::render(multiplier)),
    }
}

/// Nearest whole American line for a multiplier.
///
/// Prices at or above even money are positive (`+100` and up), shorter
/// prices negative (`-101` and down).
pub fn american_line(multiplier: Decimal) -> Result<i64, DomainError> {
    let out_of_range = || DomainError::invalid_value(&multiplier.to_string(), "out of range");
    if multiplier <= Decimal::ONE {
        return Err(DomainError::invalid_value(
            &multiplier.to_string(),
            "multiplier must exceed 1.0",
        ));
    }

    let profit = multiplier - Decimal::ONE;
    let line = if profit >= Decimal::ONE {
        profit.checked_mul(Decimal::ONE_HUNDRED).ok_or_else(out_of_range)?
    } else {
        -Decimal::ONE_HUNDRED.checked_div(profit).ok_or_else(out_of_range)?
    };

    line.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(out_of_range)
}

fn american_multiplier(odds: &str) -> Result<Decimal, DomainError> {
    let line: i64 = odds
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_format(odds, OddsNotation::American))?;

    if line == 0 {
        return Err(DomainError::invalid_value(odds, "american odds cannot be zero"));
    }
    if line.unsigned_abs() < MIN_AMERICAN_MAGNITUDE {
        return Err(DomainError::invalid_value(
            odds,
            "american odds magnitude must be at least 100",
        ));
    }

    let value = Decimal::from(line);
    if line > 0 {
        Ok(Decimal::ONE + value / Decimal::ONE_HUNDRED)
    } else {
        Ok(Decimal::ONE + Decimal::ONE_HUNDRED / value.abs())
    }
}

fn decimal_multiplier(odds: &str) -> Result<Decimal, DomainError> {
    let value = Decimal::from_str(odds.trim())
        .map_err(|_| DomainError::invalid_format(odds, OddsNotation::Decimal))?;

    if value <= Decimal::ONE {
        return Err(DomainError::invalid_value(odds, "decimal odds must exceed 1.0"));
    }
    Ok(value)
}

fn format_decimal(multiplier: Decimal) -> String {
    let target = american_line(multiplier).ok();

    for places in MIN_DECIMAL_PLACES..=MAX_DECIMAL_PLACES {
        let rounded = multiplier.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        if target.is_none() || american_line(rounded).ok() == target {
            return format!("{rounded:.prec$}", prec = places as usize);
        }
    }

    let rounded =
        multiplier.round_dp_with_strategy(MAX_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = MAX_DECIMAL_PLACES as usize)
}
