use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PropertyFinancials;

/// Income side of Schedule E for one property (line 3, rents received).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEIncome {
    /// Annualized rental income, rounded to cents.
    pub rental_income: Decimal,
}

/// The fifteen Schedule E expense lines, 5 through 19.
///
/// Field declaration order is the positional contract with the PDF/CSV
/// renderers, which map fields to IRS form line numbers in sequence. Do not
/// reorder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEExpenses {
    /// Line 5: Advertising.
    pub advertising: Decimal,
    /// Line 6: Auto and travel.
    pub auto_travel: Decimal,
    /// Line 7: Cleaning and maintenance.
    pub cleaning_maintenance: Decimal,
    /// Line 8: Commissions.
    pub commissions: Decimal,
    /// Line 9: Insurance.
    pub insurance: Decimal,
    /// Line 10: Legal and other professional fees.
    pub legal_professional: Decimal,
    /// Line 11: Management fees.
    pub management_fees: Decimal,
    /// Line 12: Mortgage interest paid to banks.
    pub mortgage_interest: Decimal,
    /// Line 13: Other interest.
    pub other_interest: Decimal,
    /// Line 14: Repairs.
    pub repairs: Decimal,
    /// Line 15: Supplies.
    pub supplies: Decimal,
    /// Line 16: Taxes.
    pub taxes: Decimal,
    /// Line 17: Utilities.
    pub utilities: Decimal,
    /// Line 18: Depreciation expense. Always engine-computed; never
    /// populated from user entries.
    pub depreciation: Decimal,
    /// Line 19: Other expenses.
    pub other: Decimal,
}

impl ScheduleEExpenses {
    /// Unrounded sum of all fifteen expense lines.
    ///
    /// Callers wanting the line 20 figure should round the result (see
    /// [`crate::calculations::schedule_e::calculate_total_expenses`]).
    pub fn line_sum(&self) -> Decimal {
        self.advertising
            + self.auto_travel
            + self.cleaning_maintenance
            + self.commissions
            + self.insurance
            + self.legal_professional
            + self.management_fees
            + self.mortgage_interest
            + self.other_interest
            + self.repairs
            + self.supplies
            + self.taxes
            + self.utilities
            + self.depreciation
            + self.other
    }
}

/// Depreciation detail attached to a property's Schedule E data for report
/// footnotes.
///
/// Prior-year accumulated depreciation is not tracked by this engine; the
/// detail covers the current tax year only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationDetail {
    /// Purchase price minus land value.
    pub depreciable_basis: Decimal,
    /// Month component of the purchase date, 1-12.
    pub month_placed_in_service: u32,
    /// Depreciation claimed for the tax year being reported.
    pub current_year_depreciation: Decimal,
}

/// Complete Schedule E figures for one property and one tax year.
///
/// Invariants maintained by the aggregator:
/// - `total_expenses` equals the rounded sum of the fifteen expense lines.
/// - `net_income` equals `rental_income - total_expenses`, rounded, sign
///   preserved (losses stay negative).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEData {
    pub property: PropertyFinancials,
    pub tax_year: i32,
    pub income: ScheduleEIncome,
    pub expenses: ScheduleEExpenses,
    /// Line 20: total expenses.
    pub total_expenses: Decimal,
    /// Line 21: income or loss, signed.
    pub net_income: Decimal,
    pub depreciation: DepreciationDetail,
}

/// Portfolio rollup of Schedule E data across properties sharing one tax
/// year.
///
/// Each contained property's figures were already rounded to cents; the
/// aggregate totals are plain sums rounded once more as a final step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleESummary {
    pub tax_year: i32,
    /// Per-property data in the order supplied by the caller.
    pub properties: Vec<ScheduleEData>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_depreciation: Decimal,
    pub net_income: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn line_sum_adds_all_fifteen_lines() {
        let expenses = ScheduleEExpenses {
            advertising: dec!(1),
            auto_travel: dec!(2),
            cleaning_maintenance: dec!(3),
            commissions: dec!(4),
            insurance: dec!(5),
            legal_professional: dec!(6),
            management_fees: dec!(7),
            mortgage_interest: dec!(8),
            other_interest: dec!(9),
            repairs: dec!(10),
            supplies: dec!(11),
            taxes: dec!(12),
            utilities: dec!(13),
            depreciation: dec!(14),
            other: dec!(15),
        };

        assert_eq!(expenses.line_sum(), dec!(120));
    }

    #[test]
    fn line_sum_of_default_is_zero() {
        assert_eq!(ScheduleEExpenses::default().line_sum(), dec!(0));
    }
}
