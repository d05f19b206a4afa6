//! Calculation modules for Schedule E (Form 1040) rental real estate.
//!
//! The pipeline runs leaf to root: [`depreciation`] produces the line 18
//! figure, [`schedule_e`] folds raw income/expense entries and depreciation
//! into per-property Schedule E data, and [`summary`] rolls multiple
//! properties up into portfolio totals for a single tax year.
//!
//! Every function here is a pure transformation of its inputs; nothing is
//! cached or read from ambient state, so calls for different properties may
//! run concurrently without coordination.

pub mod common;
pub mod depreciation;
pub mod schedule_e;
pub mod summary;

pub use depreciation::{DepreciationError, DepreciationResult};
pub use summary::SummaryError;
