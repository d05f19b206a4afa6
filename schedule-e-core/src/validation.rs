//! Advisory sanity checks on aggregated Schedule E data.
//!
//! Everything here is non-fatal: checks return human-readable warning
//! strings for the caller to display and never halt a calculation or mutate
//! the data. Each finding is also logged through `tracing` so batch report
//! runs leave a trail.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::ScheduleEData;

/// Expense-to-income ratio above which spending looks implausible (150%).
fn expense_ratio_threshold() -> Decimal {
    Decimal::new(15, 1)
}

/// Runs advisory plausibility checks against one property's Schedule E
/// data.
///
/// Returns a list of warning strings, empty when nothing looks off. Checks:
///
/// - negative rental income;
/// - zero depreciation alongside positive mortgage interest (a financed
///   property almost always has a depreciation deduction; a cash purchase
///   can trip this heuristic falsely, which is accepted);
/// - total expenses above 150% of rental income — skipped entirely when
///   rental income is zero or negative, so a vacant-year property never
///   divides by zero;
/// - incomplete address (missing street or city).
pub fn validate_schedule_e_data(data: &ScheduleEData) -> Vec<String> {
    let mut warnings = Vec::new();

    if data.income.rental_income < Decimal::ZERO {
        push_warning(
            &mut warnings,
            data,
            format!(
                "rental income is negative ({}); income should typically be positive",
                data.income.rental_income
            ),
        );
    }

    if data.expenses.depreciation == Decimal::ZERO
        && data.expenses.mortgage_interest > Decimal::ZERO
    {
        push_warning(
            &mut warnings,
            data,
            "no depreciation recorded despite mortgage interest; a financed rental \
             usually has a depreciation deduction"
                .to_string(),
        );
    }

    // Ratio check only makes sense against positive income
    if data.income.rental_income > Decimal::ZERO
        && data.total_expenses / data.income.rental_income > expense_ratio_threshold()
    {
        push_warning(
            &mut warnings,
            data,
            format!(
                "total expenses ({}) exceed 150% of rental income ({})",
                data.total_expenses, data.income.rental_income
            ),
        );
    }

    let address = &data.property.address;
    if address.street.is_none() || address.city.is_none() {
        push_warning(
            &mut warnings,
            data,
            "property address is incomplete (missing street or city)".to_string(),
        );
    }

    warnings
}

fn push_warning(
    warnings: &mut Vec<String>,
    data: &ScheduleEData,
    message: String,
) {
    warn!(
        property = %data.property.name,
        tax_year = data.tax_year,
        "{message}"
    );
    warnings.push(message);
}
