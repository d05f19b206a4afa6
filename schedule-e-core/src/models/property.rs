use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rental property type as recorded on Schedule E, line 1b.
///
/// Informational only: the depreciation and aggregation math never branches
/// on it (this engine models 27.5-year residential property throughout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    MultiFamily,
    Condo,
    Townhouse,
    Other,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleFamily => "single_family",
            Self::MultiFamily => "multi_family",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single_family" => Some(Self::SingleFamily),
            "multi_family" => Some(Self::MultiFamily),
            "condo" => Some(Self::Condo),
            "townhouse" => Some(Self::Townhouse),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Mailing address of a rental property.
///
/// Fields are optional because the address wizard upstream allows partial
/// saves; [`crate::validation::validate_schedule_e_data`] flags missing
/// street or city as an advisory warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

/// Financial snapshot of a rental property as supplied by the persistence
/// layer.
///
/// The engine treats this as an immutable input record: monetary values
/// arrive already converted to [`Decimal`], and no field is validated here
/// beyond what the individual calculations require. In particular
/// `land_value > purchase_price` is legal input and produces a negative
/// depreciable basis that propagates unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFinancials {
    pub name: String,
    pub address: PropertyAddress,

    /// Total purchase price, land included.
    pub purchase_price: Decimal,

    /// Assessed land value; land is not depreciable.
    pub land_value: Decimal,

    /// Date the property was placed in service (mid-month convention keys
    /// off the month component).
    pub purchase_date: NaiveDate,

    pub property_type: PropertyType,
}
