//! Schedule E aggregation for one property and tax year.
//!
//! Folds raw income and expense entries into the fixed Schedule E line
//! structure:
//!
//! | Line  | Description |
//! |-------|-------------|
//! | 3     | Rents received (annualized income) |
//! | 5-17  | Categorized expenses at face value |
//! | 18    | Depreciation expense (engine-computed) |
//! | 19    | Other expenses, including unmapped categories |
//! | 20    | Total expenses |
//! | 21    | Income or (loss) |
//!
//! Income entries are annualized by frequency; expense entries are summed
//! verbatim with frequency ignored. That asymmetry mirrors how the data-entry
//! forms capture the two sides (rent as a recurring rate, expenses as
//! already-annual totals) and is part of the contract with the report
//! renderers.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use schedule_e_core::calculations::schedule_e::generate_schedule_e_data;
//! use schedule_e_core::models::{
//!     ExpenseCategory, ExpenseEntry, Frequency, IncomeEntry, PropertyAddress,
//!     PropertyFinancials, PropertyType,
//! };
//!
//! let property = PropertyFinancials {
//!     name: "12 Elm St".to_string(),
//!     address: PropertyAddress::default(),
//!     purchase_price: dec!(300000),
//!     land_value: dec!(60000),
//!     purchase_date: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap(),
//!     property_type: PropertyType::SingleFamily,
//! };
//! let income = vec![IncomeEntry {
//!     amount: dec!(2000),
//!     frequency: Frequency::Monthly,
//!     description: None,
//! }];
//! let expenses = vec![ExpenseEntry {
//!     amount: dec!(3500),
//!     category: ExpenseCategory::Repairs,
//!     frequency: None,
//!     vendor: None,
//!     description: None,
//! }];
//!
//! let data = generate_schedule_e_data(&property, 2021, &income, &expenses).unwrap();
//!
//! assert_eq!(data.income.rental_income, dec!(24000.00));
//! assert_eq!(data.expenses.depreciation, dec!(8726.40));
//! assert_eq!(data.total_expenses, dec!(12226.40));
//! assert_eq!(data.net_income, dec!(11773.60));
//! ```

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::calculations::depreciation::{
    DepreciationError, calculate_depreciable_basis, calculate_depreciation_for_tax_year,
};
use crate::models::{
    DepreciationDetail, ExpenseCategory, ExpenseEntry, IncomeEntry, PropertyFinancials,
    ScheduleEData, ScheduleEExpenses, ScheduleEIncome,
};

/// Annualizes and sums income entries into the line 3 figure.
///
/// Each entry is multiplied by its frequency's annualization factor
/// (monthly ×12, quarterly ×4, annual and one_time ×1), then the total is
/// rounded once to cents.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use schedule_e_core::calculations::schedule_e::calculate_schedule_e_income;
/// use schedule_e_core::models::{Frequency, IncomeEntry};
///
/// let entries = vec![
///     IncomeEntry { amount: dec!(1000), frequency: Frequency::Monthly, description: None },
///     IncomeEntry { amount: dec!(1000), frequency: Frequency::OneTime, description: None },
/// ];
///
/// let income = calculate_schedule_e_income(&entries);
///
/// assert_eq!(income.rental_income, dec!(13000.00));
/// ```
pub fn calculate_schedule_e_income(entries: &[IncomeEntry]) -> ScheduleEIncome {
    let total: Decimal = entries
        .iter()
        .map(|entry| entry.amount * entry.frequency.annualization_factor())
        .sum();

    ScheduleEIncome {
        rental_income: round_half_up(total),
    }
}

/// Buckets expense entries into Schedule E lines 5 through 19.
///
/// Amounts are added at face value; any `frequency` on an entry is ignored
/// (expenses are captured as annual totals upstream). Entries tagged
/// `Depreciation` or `Other` land on line 19: line 18 is reserved for the
/// engine-computed depreciation figure and is left at zero here for the
/// orchestrator to fill.
pub fn calculate_schedule_e_expenses(entries: &[ExpenseEntry]) -> ScheduleEExpenses {
    let mut expenses = ScheduleEExpenses::default();

    for entry in entries {
        let line = match entry.category {
            ExpenseCategory::Advertising => &mut expenses.advertising,
            ExpenseCategory::AutoTravel => &mut expenses.auto_travel,
            ExpenseCategory::CleaningMaintenance => &mut expenses.cleaning_maintenance,
            ExpenseCategory::Commissions => &mut expenses.commissions,
            ExpenseCategory::Insurance => &mut expenses.insurance,
            ExpenseCategory::LegalProfessional => &mut expenses.legal_professional,
            ExpenseCategory::ManagementFees => &mut expenses.management_fees,
            ExpenseCategory::MortgageInterest => &mut expenses.mortgage_interest,
            ExpenseCategory::OtherInterest => &mut expenses.other_interest,
            ExpenseCategory::Repairs => &mut expenses.repairs,
            ExpenseCategory::Supplies => &mut expenses.supplies,
            ExpenseCategory::PropertyTaxes => &mut expenses.taxes,
            ExpenseCategory::Utilities => &mut expenses.utilities,
            ExpenseCategory::Depreciation | ExpenseCategory::Other => &mut expenses.other,
        };
        if entry.category == ExpenseCategory::Depreciation {
            warn!(
                amount = %entry.amount,
                "user-supplied depreciation entry routed to line 19; line 18 is engine-computed"
            );
        }
        *line += entry.amount;
    }

    expenses
}

/// Computes total expenses (line 20): the rounded sum of lines 5-19.
pub fn calculate_total_expenses(expenses: &ScheduleEExpenses) -> Decimal {
    round_half_up(expenses.line_sum())
}

/// Computes net income or loss (line 21).
///
/// The sign is preserved: a loss comes back negative, never clamped to
/// zero.
pub fn calculate_net_income(
    income: &ScheduleEIncome,
    total_expenses: Decimal,
) -> Decimal {
    round_half_up(income.rental_income - total_expenses)
}

/// Builds the complete Schedule E data block for one property and tax year.
///
/// Orchestrates the full per-property pipeline: annualized income, expense
/// buckets, the line 18 depreciation figure from the depreciation
/// calculator, line 20, line 21, and the depreciation detail footnote.
///
/// Prior-year accumulated depreciation is not computed here; the detail
/// block covers the current tax year only.
///
/// # Errors
///
/// Returns [`DepreciationError`] if the depreciation calculation rejects
/// its inputs.
pub fn generate_schedule_e_data(
    property: &PropertyFinancials,
    tax_year: i32,
    income_entries: &[IncomeEntry],
    expense_entries: &[ExpenseEntry],
) -> Result<ScheduleEData, DepreciationError> {
    let income = calculate_schedule_e_income(income_entries);
    let mut expenses = calculate_schedule_e_expenses(expense_entries);

    let current_year_depreciation = calculate_depreciation_for_tax_year(
        property.purchase_price,
        property.land_value,
        property.purchase_date,
        tax_year,
    )?;
    expenses.depreciation = current_year_depreciation;

    let total_expenses = calculate_total_expenses(&expenses);
    let net_income = calculate_net_income(&income, total_expenses);

    Ok(ScheduleEData {
        property: property.clone(),
        tax_year,
        income,
        expenses,
        total_expenses,
        net_income,
        depreciation: DepreciationDetail {
            depreciable_basis: calculate_depreciable_basis(
                property.purchase_price,
                property.land_value,
            ),
            month_placed_in_service: property.purchase_date.month(),
            current_year_depreciation,
        },
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{Frequency, PropertyAddress, PropertyType};

    fn income(
        amount: Decimal,
        frequency: Frequency,
    ) -> IncomeEntry {
        IncomeEntry {
            amount,
            frequency,
            description: None,
        }
    }

    fn expense(
        amount: Decimal,
        category: ExpenseCategory,
    ) -> ExpenseEntry {
        ExpenseEntry {
            amount,
            category,
            frequency: None,
            vendor: None,
            description: None,
        }
    }

    fn test_property() -> PropertyFinancials {
        PropertyFinancials {
            name: "12 Elm St".to_string(),
            address: PropertyAddress {
                street: Some("12 Elm St".to_string()),
                city: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                zip: Some("62704".to_string()),
            },
            purchase_price: dec!(300000),
            land_value: dec!(60000),
            purchase_date: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap(),
            property_type: PropertyType::SingleFamily,
        }
    }

    // =========================================================================
    // calculate_schedule_e_income tests
    // =========================================================================

    #[test]
    fn income_annualizes_monthly_entries() {
        let result = calculate_schedule_e_income(&[income(dec!(1000), Frequency::Monthly)]);

        assert_eq!(result.rental_income, dec!(12000.00));
    }

    #[test]
    fn income_annualizes_quarterly_entries() {
        let result = calculate_schedule_e_income(&[income(dec!(1500), Frequency::Quarterly)]);

        assert_eq!(result.rental_income, dec!(6000.00));
    }

    #[test]
    fn income_keeps_annual_entries_as_is() {
        let result = calculate_schedule_e_income(&[income(dec!(18000), Frequency::Annual)]);

        assert_eq!(result.rental_income, dec!(18000.00));
    }

    #[test]
    fn income_does_not_annualize_one_time_entries() {
        let result = calculate_schedule_e_income(&[income(dec!(1000), Frequency::OneTime)]);

        assert_eq!(result.rental_income, dec!(1000.00));
    }

    #[test]
    fn income_sums_mixed_frequencies() {
        let entries = vec![
            income(dec!(1500), Frequency::Monthly),
            income(dec!(300), Frequency::Quarterly),
            income(dec!(250), Frequency::OneTime),
        ];

        let result = calculate_schedule_e_income(&entries);

        // 18000 + 1200 + 250
        assert_eq!(result.rental_income, dec!(19450.00));
    }

    #[test]
    fn income_of_no_entries_is_zero() {
        let result = calculate_schedule_e_income(&[]);

        assert_eq!(result.rental_income, dec!(0.00));
    }

    #[test]
    fn income_rounds_once_at_the_end() {
        // 3 × (33.335 × 12) = 1200.06 exactly; per-entry products stay
        // unrounded until the final sum
        let entries = vec![
            income(dec!(33.335), Frequency::Monthly),
            income(dec!(33.335), Frequency::Monthly),
            income(dec!(33.335), Frequency::Monthly),
        ];

        let result = calculate_schedule_e_income(&entries);

        assert_eq!(result.rental_income, dec!(1200.06));
    }

    // =========================================================================
    // calculate_schedule_e_expenses tests
    // =========================================================================

    #[test]
    fn expenses_bucket_by_category() {
        let entries = vec![
            expense(dec!(1200), ExpenseCategory::Insurance),
            expense(dec!(3500), ExpenseCategory::Repairs),
            expense(dec!(4200), ExpenseCategory::PropertyTaxes),
        ];

        let result = calculate_schedule_e_expenses(&entries);

        assert_eq!(result.insurance, dec!(1200));
        assert_eq!(result.repairs, dec!(3500));
        assert_eq!(result.taxes, dec!(4200));
    }

    #[test]
    fn expenses_ignore_frequency() {
        let entry = ExpenseEntry {
            amount: dec!(500),
            category: ExpenseCategory::Repairs,
            frequency: Some(Frequency::Monthly),
            vendor: None,
            description: None,
        };

        let result = calculate_schedule_e_expenses(&[entry]);

        // Face value, never 500 × 12
        assert_eq!(result.repairs, dec!(500));
    }

    #[test]
    fn expenses_accumulate_within_a_category() {
        let entries = vec![
            expense(dec!(200), ExpenseCategory::Utilities),
            expense(dec!(150.50), ExpenseCategory::Utilities),
        ];

        let result = calculate_schedule_e_expenses(&entries);

        assert_eq!(result.utilities, dec!(350.50));
    }

    #[test]
    fn expenses_route_other_category_to_line_19() {
        let result = calculate_schedule_e_expenses(&[expense(dec!(750), ExpenseCategory::Other)]);

        assert_eq!(result.other, dec!(750));
    }

    #[test]
    fn expenses_route_user_depreciation_to_line_19() {
        let result =
            calculate_schedule_e_expenses(&[expense(dec!(9000), ExpenseCategory::Depreciation)]);

        // Line 18 stays engine-owned
        assert_eq!(result.depreciation, dec!(0));
        assert_eq!(result.other, dec!(9000));
    }

    #[test]
    fn expenses_leave_depreciation_line_at_zero() {
        let result = calculate_schedule_e_expenses(&[expense(dec!(100), ExpenseCategory::Repairs)]);

        assert_eq!(result.depreciation, dec!(0));
    }

    // =========================================================================
    // calculate_total_expenses / calculate_net_income tests
    // =========================================================================

    #[test]
    fn total_expenses_sums_all_lines_including_depreciation() {
        let expenses = ScheduleEExpenses {
            repairs: dec!(3500),
            insurance: dec!(1200),
            depreciation: dec!(8726.40),
            ..Default::default()
        };

        assert_eq!(calculate_total_expenses(&expenses), dec!(13426.40));
    }

    #[test]
    fn net_income_is_income_minus_total_expenses() {
        let income = ScheduleEIncome {
            rental_income: dec!(24000.00),
        };

        assert_eq!(calculate_net_income(&income, dec!(13426.40)), dec!(10573.60));
    }

    #[test]
    fn net_income_preserves_losses_as_negative() {
        let income = ScheduleEIncome {
            rental_income: dec!(10000.00),
        };

        assert_eq!(calculate_net_income(&income, dec!(15250.75)), dec!(-5250.75));
    }

    // =========================================================================
    // generate_schedule_e_data tests
    // =========================================================================

    #[test]
    fn generate_injects_depreciation_into_line_18() {
        let property = test_property();

        let data = generate_schedule_e_data(
            &property,
            2021,
            &[income(dec!(2000), Frequency::Monthly)],
            &[expense(dec!(3500), ExpenseCategory::Repairs)],
        )
        .unwrap();

        // Year 2: 240000 × 3.636% = 8726.40
        assert_eq!(data.expenses.depreciation, dec!(8726.40));
        assert_eq!(data.depreciation.current_year_depreciation, dec!(8726.40));
    }

    #[test]
    fn generate_first_year_uses_purchase_month() {
        let property = test_property();

        let data = generate_schedule_e_data(&property, 2020, &[], &[]).unwrap();

        // January placement: 240000 × 3.485% = 8364.00
        assert_eq!(data.expenses.depreciation, dec!(8364.00));
        assert_eq!(data.depreciation.month_placed_in_service, 1);
        assert_eq!(data.depreciation.depreciable_basis, dec!(240000));
    }

    #[test]
    fn generate_totals_satisfy_invariants() {
        let property = test_property();

        let data = generate_schedule_e_data(
            &property,
            2021,
            &[income(dec!(2000), Frequency::Monthly)],
            &[
                expense(dec!(3500), ExpenseCategory::Repairs),
                expense(dec!(1200), ExpenseCategory::Insurance),
            ],
        )
        .unwrap();

        assert_eq!(data.total_expenses, round_half_up(data.expenses.line_sum()));
        assert_eq!(
            data.net_income,
            round_half_up(data.income.rental_income - data.total_expenses)
        );
        assert_eq!(data.tax_year, 2021);
    }

    #[test]
    fn generate_can_produce_a_loss() {
        let property = test_property();

        let data = generate_schedule_e_data(
            &property,
            2021,
            &[income(dec!(500), Frequency::Monthly)],
            &[expense(dec!(9000), ExpenseCategory::Repairs)],
        )
        .unwrap();

        // 6000 - (9000 + 8726.40) = -11726.40
        assert_eq!(data.net_income, dec!(-11726.40));
    }

    #[test]
    fn generate_before_service_year_has_zero_depreciation() {
        let property = test_property();

        let data = generate_schedule_e_data(&property, 2019, &[], &[]).unwrap();

        assert_eq!(data.expenses.depreciation, dec!(0));
        assert_eq!(data.total_expenses, dec!(0.00));
    }

    #[test]
    fn generate_is_deterministic() {
        let property = test_property();
        let incomes = vec![income(dec!(1975.25), Frequency::Monthly)];
        let expenses = vec![expense(dec!(433.33), ExpenseCategory::ManagementFees)];

        let a = generate_schedule_e_data(&property, 2022, &incomes, &expenses).unwrap();
        let b = generate_schedule_e_data(&property, 2022, &incomes, &expenses).unwrap();

        assert_eq!(a, b);
    }
}
