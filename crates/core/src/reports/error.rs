//! Report-level errors.

use chrono::NaiveDate;
use thiserror::Error;

use crate::batch::BatchError;
use crate::latefee::FeeError;

/// Errors surfaced by report generation.
///
/// All variants are terminal for the current report invocation: the engine
/// either returns a complete report or one of these, never partial output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested window is empty or inverted. Rejected before any record
    /// is fetched.
    #[error("invalid date range: end {end} must be after start {start}")]
    InvalidDateRange {
        /// Requested window start.
        start: NaiveDate,
        /// Requested window end.
        end: NaiveDate,
    },

    /// A fee computation inside the report failed, including the missing
    /// active-configuration case.
    #[error(transparent)]
    Fee(#[from] FeeError),

    /// The record-store collaborator failed mid-report.
    #[error("report generation failed")]
    Generation(#[from] BatchError),
}
