//! Shared arithmetic helpers for Schedule E calculations.
//!
//! Rounding checkpoints matter here: the engine rounds after every
//! intermediate step and again after summation, and downstream figures are
//! fixture-matched to the cent, so callers must round exactly where the
//! calculation modules do and nowhere else.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from
/// zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use schedule_e_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(8364.004)), dec!(8364.00));
/// assert_eq!(round_half_up(dec!(8364.005)), dec!(8364.01));
/// assert_eq!(round_half_up(dec!(-250.125)), dec!(-250.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Applies an IRS table percentage to an amount and rounds to cents.
///
/// The depreciation tables publish percent values (e.g. `3.485` meaning
/// 3.485%), so the percentage is divided by 100 before multiplying.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use schedule_e_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(240000), dec!(3.485)), dec!(8364.00));
/// assert_eq!(percent_of(dec!(240000), dec!(3.636)), dec!(8726.40));
/// ```
pub fn percent_of(
    amount: Decimal,
    percentage: Decimal,
) -> Decimal {
    round_half_up(amount * percentage / Decimal::ONE_HUNDRED)
}
