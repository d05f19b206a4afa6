//! Currency display formatting for reports and exports.
//!
//! Tax forms report whole dollars, so both helpers render `$` plus comma
//! grouping with no decimal places, rounding half-up. They share one
//! grouping core so a figure can never round differently between the two
//! call sites.

use rust_decimal::Decimal;

/// Formats an amount as whole US dollars with thousands grouping.
///
/// Rounds half-up to the dollar. Negative amounts carry the minus sign
/// ahead of the symbol.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use schedule_e_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(8364.00)), "$8,364");
/// assert_eq!(format_currency(dec!(1234567.89)), "$1,234,568");
/// assert_eq!(format_currency(dec!(-500)), "-$500");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let negative = whole < Decimal::ZERO;
    let digits = whole.abs().to_string();
    let grouped = group_thousands(&digits);
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats an amount for a tax-form field.
///
/// Identical rendering to [`format_currency`]; kept as a separate entry
/// point because the PDF and CSV renderers call both names.
pub fn format_tax_amount(amount: Decimal) -> String {
    format_currency(amount)
}

/// Inserts commas every three digits, right to left.
///
/// `digits` must be a non-negative integer string (no sign, no fraction).
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn formats_small_amounts_without_grouping() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(999)), "$999");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(dec!(1000)), "$1,000");
        assert_eq!(format_currency(dec!(8364.00)), "$8,364");
    }

    #[test]
    fn groups_millions() {
        assert_eq!(format_currency(dec!(1234567.89)), "$1,234,568");
    }

    #[test]
    fn rounds_half_up_to_whole_dollars() {
        assert_eq!(format_currency(dec!(100.50)), "$101");
        assert_eq!(format_currency(dec!(100.49)), "$100");
    }

    #[test]
    fn negative_amounts_carry_leading_minus() {
        assert_eq!(format_currency(dec!(-500)), "-$500");
        assert_eq!(format_currency(dec!(-1234.56)), "-$1,235");
    }

    #[test]
    fn tax_amount_matches_currency_rendering() {
        for value in [dec!(0), dec!(8726.40), dec!(-11726.40), dec!(1234567.89)] {
            assert_eq!(format_tax_amount(value), format_currency(value));
        }
    }
}
