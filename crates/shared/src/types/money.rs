//! Minor-unit helpers for monetary amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount is a `rust_decimal::Decimal` kept at cent precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in the currency's minor unit (cents).
pub const MINOR_UNIT_DP: u32 = 2;

/// Rounds a value to the minor unit, half away from zero.
///
/// The result always carries exactly two decimal places, so `1000` becomes
/// `1000.00`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use rentroll_shared::types::round_minor;
///
/// assert_eq!(round_minor(dec!(2.345)), dec!(2.35));
/// assert_eq!(round_minor(dec!(-2.345)), dec!(-2.35));
/// ```
#[must_use]
pub fn round_minor(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MINOR_UNIT_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MINOR_UNIT_DP);
    rounded
}

/// Returns true if the value carries no digits below the minor unit and can
/// be represented at exactly two decimal places.
///
/// Values near `Decimal::MAX` cannot take a scale of two and are rejected.
#[must_use]
pub fn has_minor_unit_precision(value: Decimal) -> bool {
    let rounded = round_minor(value);
    rounded.scale() == MINOR_UNIT_DP && rounded == value
}
