//! Portfolio rollup of Schedule E data across properties.
//!
//! A summary covers exactly one tax year. Mixing years is a hard error that
//! names every year found, never a silent filter: a portfolio report that
//! quietly dropped a property would be worse than no report.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::{ScheduleEData, ScheduleESummary};

/// Errors that can occur when rolling up a portfolio summary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// A summary was requested for zero properties.
    #[error("cannot summarize an empty portfolio")]
    EmptyPortfolio,

    /// The supplied properties span more than one tax year.
    #[error("properties span multiple tax years: {0:?}")]
    MixedTaxYears(Vec<i32>),
}

/// Rolls per-property Schedule E data up into portfolio totals.
///
/// Each property's figures were already rounded to cents by the aggregator;
/// the four portfolio totals are plain sums across properties, each rounded
/// once more as a final step. Property order is preserved in the output.
///
/// # Errors
///
/// - [`SummaryError::EmptyPortfolio`] if `properties` is empty.
/// - [`SummaryError::MixedTaxYears`] if the properties do not all share one
///   tax year; the error lists every distinct year found, in input order.
///
/// # Example
///
/// ```
/// use schedule_e_core::calculations::summary::{SummaryError, generate_schedule_e_summary};
///
/// let err = generate_schedule_e_summary(vec![]).unwrap_err();
/// assert_eq!(err, SummaryError::EmptyPortfolio);
/// ```
pub fn generate_schedule_e_summary(
    properties: Vec<ScheduleEData>,
) -> Result<ScheduleESummary, SummaryError> {
    let Some(first) = properties.first() else {
        return Err(SummaryError::EmptyPortfolio);
    };
    let tax_year = first.tax_year;

    let mut distinct_years: Vec<i32> = Vec::new();
    for data in &properties {
        if !distinct_years.contains(&data.tax_year) {
            distinct_years.push(data.tax_year);
        }
    }
    if distinct_years.len() > 1 {
        return Err(SummaryError::MixedTaxYears(distinct_years));
    }

    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut total_depreciation = Decimal::ZERO;
    let mut net_income = Decimal::ZERO;
    for data in &properties {
        total_income += data.income.rental_income;
        total_expenses += data.total_expenses;
        total_depreciation += data.expenses.depreciation;
        net_income += data.net_income;
    }

    Ok(ScheduleESummary {
        tax_year,
        properties,
        total_income: round_half_up(total_income),
        total_expenses: round_half_up(total_expenses),
        total_depreciation: round_half_up(total_depreciation),
        net_income: round_half_up(net_income),
    })
}
