use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment frequency recorded against an income entry.
///
/// Income is annualized by frequency before it lands on Schedule E line 3;
/// expense aggregation deliberately ignores frequency (see
/// [`crate::calculations::schedule_e::calculate_schedule_e_expenses`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Monthly,
    Quarterly,
    Annual,
    OneTime,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
            Self::OneTime => "one_time",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "annual" => Some(Self::Annual),
            "one_time" => Some(Self::OneTime),
            _ => None,
        }
    }

    /// Multiplier that converts one entry of this frequency into its
    /// annual-equivalent amount.
    ///
    /// `OneTime` is already an annual-equivalent single figure and is
    /// therefore not multiplied.
    pub fn annualization_factor(&self) -> Decimal {
        match self {
            Self::Monthly => Decimal::from(12),
            Self::Quarterly => Decimal::from(4),
            Self::Annual | Self::OneTime => Decimal::ONE,
        }
    }
}

/// Expense category, mapping onto Schedule E lines 5 through 19.
///
/// `Depreciation` exists so stored records can name the category, but the
/// aggregator never accepts a user-supplied depreciation amount: line 18 is
/// always engine-computed, and entries tagged `Depreciation` are routed to
/// line 19 (other) together with `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Advertising,
    AutoTravel,
    CleaningMaintenance,
    Commissions,
    Insurance,
    LegalProfessional,
    ManagementFees,
    MortgageInterest,
    OtherInterest,
    Repairs,
    Supplies,
    PropertyTaxes,
    Utilities,
    Depreciation,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advertising => "advertising",
            Self::AutoTravel => "auto_travel",
            Self::CleaningMaintenance => "cleaning_maintenance",
            Self::Commissions => "commissions",
            Self::Insurance => "insurance",
            Self::LegalProfessional => "legal_professional",
            Self::ManagementFees => "management_fees",
            Self::MortgageInterest => "mortgage_interest",
            Self::OtherInterest => "other_interest",
            Self::Repairs => "repairs",
            Self::Supplies => "supplies",
            Self::PropertyTaxes => "property_taxes",
            Self::Utilities => "utilities",
            Self::Depreciation => "depreciation",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "advertising" => Some(Self::Advertising),
            "auto_travel" => Some(Self::AutoTravel),
            "cleaning_maintenance" => Some(Self::CleaningMaintenance),
            "commissions" => Some(Self::Commissions),
            "insurance" => Some(Self::Insurance),
            "legal_professional" => Some(Self::LegalProfessional),
            "management_fees" => Some(Self::ManagementFees),
            "mortgage_interest" => Some(Self::MortgageInterest),
            "other_interest" => Some(Self::OtherInterest),
            "repairs" => Some(Self::Repairs),
            "supplies" => Some(Self::Supplies),
            "property_taxes" => Some(Self::PropertyTaxes),
            "utilities" => Some(Self::Utilities),
            "depreciation" => Some(Self::Depreciation),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A single rental income record for one property and tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub amount: Decimal,
    pub frequency: Frequency,
    pub description: Option<String>,
}

/// A single expense record for one property and tax year.
///
/// `frequency` is carried through from the data-entry forms but plays no
/// role in aggregation: expense amounts are summed at face value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub frequency: Option<Frequency>,
    pub vendor: Option<String>,
    pub description: Option<String>,
}
