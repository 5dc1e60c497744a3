//! Shared helpers for the fiscal calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rounds a monetary amount to two decimal places, half-up (midpoints go
/// away from zero, the usual financial convention).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// `part / whole` expressed in percent, rounded to two decimal places.
/// Returns zero when `whole` is zero or negative.
pub fn ratio_as_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(part / whole * dec!(100))
}
