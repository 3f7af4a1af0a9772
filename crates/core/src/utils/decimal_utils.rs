use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a monetary value to display precision, halves away from zero.
///
/// Every monetary figure that leaves the valuation pipeline goes through
/// this function so that `0.125` always becomes `0.13`.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Percentage change from `base` to `value`, rounded to display precision.
///
/// Returns zero when `base` is zero.
pub fn percentage_change(value: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    ((value - base) / base * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
}
