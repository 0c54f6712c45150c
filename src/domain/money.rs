//! Monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency amount represented as a Decimal for precision.
pub type Money = Decimal;

/// Round a monetary amount to whole cents, halves away from zero.
#[must_use]
pub fn round_cents(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
