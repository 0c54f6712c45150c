//! Fractional odds parsing and rendering.
//!
//! Rendering is a display heuristic, not an exact inverse. Distinct
//! fractions can collapse onto the same rounded decimal, so the rendered
//! fraction is the closest common line, then the closest small fraction.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::OddsNotation;
use crate::domain::error::DomainError;

/// Largest denominator tried by the best-fit search.
pub const MAX_DENOMINATOR: u32 = 20;

/// Maximum distance (in profit-per-unit) at which a price snaps to a
/// canonical line. Wide enough for two-place decimal rounding.
const CANONICAL_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// A common bookmaker line with its conventional label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalFraction {
    pub numerator: u32,
    pub denominator: u32,
    pub label: &'static str,
}

const fn line(numerator: u32, denominator: u32, label: &'static str) -> CanonicalFraction {
    CanonicalFraction {
        numerator,
        denominator,
        label,
    }
}

/// Common lines rendered by their conventional label.
pub const CANONICAL_FRACTIONS: &[CanonicalFraction] = &[
    line(10, 11, "10/11"),
    line(1, 1, "EVS"),
    line(5, 6, "5/6"),
    line(6, 5, "6/5"),
    line(2, 3, "2/3"),
    line(3, 2, "3/2"),
    line(1, 2, "1/2"),
    line(2, 1, "2/1"),
];

impl CanonicalFraction {
    fn ratio(&self) -> Decimal {
        Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }
}

/// Parse `num/den` (or `EVS`/`evens`) into a total-return multiplier.
pub(super) fn multiplier(odds: &str) -> Result<Decimal, DomainError> {
    let trimmed = odds.trim();
    if trimmed.eq_ignore_ascii_case("evs") || trimmed.eq_ignore_ascii_case("evens") {
        return Ok(Decimal::TWO);
    }

    let malformed = || DomainError::invalid_format(odds, OddsNotation::Fractional);
    let (num, den) = trimmed.split_once('/').ok_or_else(malformed)?;
    let num: u64 = num.trim().parse().map_err(|_| malformed())?;
    let den: u64 = den.trim().parse().map_err(|_| malformed())?;

    if den == 0 {
        return Err(DomainError::invalid_value(odds, "denominator cannot be zero"));
    }
    if num == 0 {
        return Err(DomainError::invalid_value(odds, "numerator must be positive"));
    }

    Ok(Decimal::ONE + Decimal::from(num) / Decimal::from(den))
}

/// Render a multiplier (> 1.0) as a fractional line.
pub(super) fn render(multiplier: Decimal) -> String {
    let ratio = multiplier - Decimal::ONE;

    if let Some(canonical) = CANONICAL_FRACTIONS
        .iter()
        .find(|c| (c.ratio() - ratio).abs() <= CANONICAL_TOLERANCE)
    {
        return canonical.label.to_string();
    }

    let (num, den) = best_fit_fraction(ratio, MAX_DENOMINATOR);
    format!("{num}/{den}")
}

/// Closest `num/den` to a positive profit ratio with `den <= max_denominator`.
///
/// Ties go to the smallest denominator, which also keeps the result in
/// lowest terms. The numerator is at least 1, so very short prices render
/// as `1/max_denominator`.
#[must_use]
pub fn best_fit_fraction(ratio: Decimal, max_denominator: u32) -> (u64, u32) {
    let mut best: Option<(u64, u32, Decimal)> = None;

    for den in 1..=max_denominator.max(1) {
        let den_dec = Decimal::from(den);
        let num = ratio
            .checked_mul(den_dec)
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|scaled| scaled.to_u64())
            .unwrap_or(0)
            .max(1);
        let error = (Decimal::from(num) / den_dec - ratio).abs();

        if best.map_or(true, |(_, _, best_error)| error < best_error) {
            best = Some((num, den, error));
        }
        if error.is_zero() {
            break;
        }
    }

    best.map_or((1, 1), |(num, den, _)| (num, den))
}
