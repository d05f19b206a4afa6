//! Pure calculation engine for IRS Schedule E rental real estate reporting.
//!
//! Converts property/income/expense records into tax-form-ready figures:
//! 27.5-year mid-month depreciation, per-property Schedule E aggregation,
//! and portfolio rollups. Persistence, report rendering, and the web tier
//! live elsewhere; this crate only transforms values it is handed.

pub mod calculations;
pub mod format;
pub mod models;
pub mod validation;

pub use calculations::depreciation::{DepreciationError, DepreciationResult};
pub use calculations::summary::SummaryError;
pub use models::*;
