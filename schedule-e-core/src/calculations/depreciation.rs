//! Depreciation calculations for 27.5-year residential rental property.
//!
//! Implements the IRS mid-month convention (MACRS GDS, straight line) used
//! for residential rental real estate. The property is treated as placed in
//! service at the midpoint of its first month, which yields a partial
//! first-year percentage from the table below; every later year uses the
//! flat 3.636% rate.
//!
//! # First-Year Percentage Table
//!
//! | Month placed in service | Rate |
//! |-------------------------|--------|
//! | January                 | 3.485% |
//! | February                | 3.182% |
//! | March                   | 2.879% |
//! | April                   | 2.576% |
//! | May                     | 2.273% |
//! | June                    | 1.970% |
//! | July                    | 1.667% |
//! | August                  | 1.364% |
//! | September               | 1.061% |
//! | October                 | 0.758% |
//! | November                | 0.455% |
//! | December                | 0.152% |
//!
//! The mid-month half-year consumed in year 1 means the 27.5-year schedule
//! spans 28 calendar years; tax years beyond that depreciate nothing. The
//! final partial-year taper in the full IRS tables is intentionally not
//! modeled: years 2 and onward are uniform at 3.636%.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use schedule_e_core::calculations::depreciation::{
//!     calculate_depreciable_basis, calculate_depreciation_schedule,
//! };
//!
//! // $300,000 purchase with $60,000 land, placed in service in January
//! assert_eq!(calculate_depreciable_basis(dec!(300000), dec!(60000)), dec!(240000));
//!
//! let schedule = calculate_depreciation_schedule(dec!(300000), dec!(60000), 1, 3).unwrap();
//!
//! assert_eq!(schedule.len(), 3);
//! assert_eq!(schedule[0].amount, dec!(8364.00));
//! assert_eq!(schedule[1].amount, dec!(8726.40));
//! assert_eq!(schedule[2].accumulated_depreciation, dec!(25816.80));
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{percent_of, round_half_up};

/// Flat straight-line rate for years 2 and onward, in percent (3.636%).
fn annual_rate() -> Decimal {
    Decimal::new(3636, 3)
}

/// Number of calendar years touched by the 27.5-year schedule.
///
/// The mid-month convention leaves a partial first year, so the recovery
/// period runs one calendar year past 27.
pub const RECOVERY_SPAN_YEARS: i32 = 28;

/// Default number of years produced by [`calculate_depreciation_schedule`]
/// callers that only need a short projection.
pub const DEFAULT_SCHEDULE_YEARS: u32 = 5;

/// Errors that can occur during depreciation calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepreciationError {
    /// The month placed in service must be 1 through 12.
    #[error("month placed in service must be 1-12, got {0}")]
    InvalidMonth(u32),
}

/// One year's row of a depreciation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationResult {
    /// Year index, 1-based relative to the first year in service.
    pub year: u32,

    /// Depreciation claimed this year, rounded to cents.
    pub amount: Decimal,

    /// The IRS table percentage applied (percent value, e.g. `3.485`).
    pub percentage: Decimal,

    /// Running total of depreciation claimed through this year.
    pub accumulated_depreciation: Decimal,

    /// Depreciable basis not yet claimed after this year.
    pub remaining_basis: Decimal,
}

/// Looks up the mid-month first-year percentage for a service month.
///
/// # Errors
///
/// Returns [`DepreciationError::InvalidMonth`] for any month outside 1-12.
/// Out-of-range months are never clamped or defaulted.
pub fn first_year_percentage(month: u32) -> Result<Decimal, DepreciationError> {
    let percentage = match month {
        1 => Decimal::new(3485, 3),
        2 => Decimal::new(3182, 3),
        3 => Decimal::new(2879, 3),
        4 => Decimal::new(2576, 3),
        5 => Decimal::new(2273, 3),
        6 => Decimal::new(1970, 3),
        7 => Decimal::new(1667, 3),
        8 => Decimal::new(1364, 3),
        9 => Decimal::new(1061, 3),
        10 => Decimal::new(758, 3),
        11 => Decimal::new(455, 3),
        12 => Decimal::new(152, 3),
        _ => return Err(DepreciationError::InvalidMonth(month)),
    };
    Ok(percentage)
}

/// Computes the depreciable basis: purchase price minus land value.
///
/// Land is never depreciable, so only the improvement value remains. No
/// sign validation is performed; a land value above the purchase price
/// yields a negative basis that propagates unchanged, with a warning logged
/// for upstream data-quality review.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use schedule_e_core::calculations::depreciation::calculate_depreciable_basis;
///
/// assert_eq!(calculate_depreciable_basis(dec!(300000), dec!(60000)), dec!(240000));
/// assert_eq!(calculate_depreciable_basis(dec!(300000), dec!(0)), dec!(300000));
/// ```
pub fn calculate_depreciable_basis(
    purchase_price: Decimal,
    land_value: Decimal,
) -> Decimal {
    let basis = purchase_price - land_value;
    if basis < Decimal::ZERO {
        warn!(
            purchase_price = %purchase_price,
            land_value = %land_value,
            basis = %basis,
            "land value exceeds purchase price; depreciable basis is negative"
        );
    }
    basis
}

/// Computes first-year depreciation under the mid-month convention.
///
/// Applies the table percentage for the month placed in service and rounds
/// half-up to cents.
///
/// # Errors
///
/// Returns [`DepreciationError::InvalidMonth`] when `month` is outside 1-12.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use schedule_e_core::calculations::depreciation::calculate_first_year_depreciation;
///
/// // January placement: 240,000 × 3.485% = 8,364.00
/// assert_eq!(
///     calculate_first_year_depreciation(dec!(240000), 1).unwrap(),
///     dec!(8364.00)
/// );
/// // July placement: 240,000 × 1.667% = 4,000.80
/// assert_eq!(
///     calculate_first_year_depreciation(dec!(240000), 7).unwrap(),
///     dec!(4000.80)
/// );
/// ```
pub fn calculate_first_year_depreciation(
    basis: Decimal,
    month: u32,
) -> Result<Decimal, DepreciationError> {
    let percentage = first_year_percentage(month)?;
    Ok(percent_of(basis, percentage))
}

/// Computes depreciation for years 2 and onward: basis × 3.636%, rounded to
/// cents.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use schedule_e_core::calculations::depreciation::calculate_annual_depreciation;
///
/// assert_eq!(calculate_annual_depreciation(dec!(240000)), dec!(8726.40));
/// ```
pub fn calculate_annual_depreciation(basis: Decimal) -> Decimal {
    percent_of(basis, annual_rate())
}

/// Builds a year-by-year depreciation schedule.
///
/// Produces exactly `years` rows numbered from 1 with no gaps. Year 1 uses
/// the mid-month table for `month`; later years use the flat annual rate.
/// The accumulator is re-rounded to cents after every addition and the
/// remaining basis after every subtraction, which is load-bearing for
/// matching report fixtures to the cent.
///
/// # Errors
///
/// Returns [`DepreciationError::InvalidMonth`] when `month` is outside 1-12.
pub fn calculate_depreciation_schedule(
    purchase_price: Decimal,
    land_value: Decimal,
    month: u32,
    years: u32,
) -> Result<Vec<DepreciationResult>, DepreciationError> {
    // Surface a bad month before emitting any rows, even for years == 0
    let first_year_pct = first_year_percentage(month)?;

    let basis = calculate_depreciable_basis(purchase_price, land_value);
    let mut results = Vec::with_capacity(years as usize);
    let mut accumulated = Decimal::ZERO;

    for year in 1..=years {
        let percentage = if year == 1 { first_year_pct } else { annual_rate() };
        let amount = percent_of(basis, percentage);
        accumulated = round_half_up(accumulated + amount);
        results.push(DepreciationResult {
            year,
            amount,
            percentage,
            accumulated_depreciation: accumulated,
            remaining_basis: round_half_up(basis - accumulated),
        });
    }

    Ok(results)
}

/// Computes the depreciation deduction for a specific tax year.
///
/// Derives the purchase year and service month from `purchase_date`, then
/// applies the schedule position `tax_year - purchase_year + 1`:
///
/// - before the purchase year: `0.00` (not yet in service);
/// - the purchase year itself: first-year mid-month amount;
/// - years 2 through 28: flat annual amount;
/// - past year 28: `0.00` (the 27.5-year schedule is exhausted).
///
/// # Errors
///
/// Returns [`DepreciationError::InvalidMonth`] only if the service month is
/// out of range, which cannot happen for a well-formed [`NaiveDate`]; the
/// `Result` keeps the contract uniform with the other depreciation entry
/// points.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use schedule_e_core::calculations::depreciation::calculate_depreciation_for_tax_year;
///
/// let purchased = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
///
/// // First year: June placement, 240,000 × 1.97% = 4,728.00
/// assert_eq!(
///     calculate_depreciation_for_tax_year(dec!(300000), dec!(60000), purchased, 2020).unwrap(),
///     dec!(4728.00)
/// );
/// // Subsequent years use the flat rate
/// assert_eq!(
///     calculate_depreciation_for_tax_year(dec!(300000), dec!(60000), purchased, 2021).unwrap(),
///     dec!(8726.40)
/// );
/// // Not yet in service
/// assert_eq!(
///     calculate_depreciation_for_tax_year(dec!(300000), dec!(60000), purchased, 2019).unwrap(),
///     dec!(0)
/// );
/// ```
pub fn calculate_depreciation_for_tax_year(
    purchase_price: Decimal,
    land_value: Decimal,
    purchase_date: NaiveDate,
    tax_year: i32,
) -> Result<Decimal, DepreciationError> {
    let purchase_year = purchase_date.year();
    let years_since_purchase = tax_year - purchase_year + 1;

    if years_since_purchase < 1 {
        return Ok(Decimal::ZERO);
    }
    if years_since_purchase > RECOVERY_SPAN_YEARS {
        return Ok(Decimal::ZERO);
    }

    let basis = calculate_depreciable_basis(purchase_price, land_value);
    if years_since_purchase == 1 {
        calculate_first_year_depreciation(basis, purchase_date.month())
    } else {
        Ok(calculate_annual_depreciation(basis))
    }
}
