//! Common utility functions for payout calculations.

use rust_decimal::Decimal;
use tracing::warn;

/// Rounds a monetary value to the nearest whole unit.
///
/// Midpoints round away from zero, following standard financial rounding
/// conventions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payout_core::calculations::common::round_to_unit;
///
/// assert_eq!(round_to_unit(dec!(1250.4)), dec!(1250));
/// assert_eq!(round_to_unit(dec!(1250.5)), dec!(1251));
/// assert_eq!(round_to_unit(dec!(-1250.5)), dec!(-1251)); // Away from zero
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a monetary form field into a [`Decimal`].
///
/// Trims whitespace and removes commas (thousands separator). Empty input is
/// treated as 0. Unparsable input is also treated as 0; a warning is logged
/// since no error kind exists for it.
pub fn parse_money(s: &str) -> Decimal {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %s, "unparsable amount treated as zero: {e}");
        Decimal::ZERO
    })
}
