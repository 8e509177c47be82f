//! Late-fee calculation error types.

use thiserror::Error;

/// Errors raised by the late-fee calculator.
///
/// Invalid financial input is never recovered silently; each variant names
/// the offending field in its message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    /// Amount due must be strictly positive.
    #[error("amount due must be greater than zero")]
    NonPositiveAmountDue,

    /// Days late cannot be negative.
    #[error("days late cannot be negative")]
    NegativeDaysLate,

    /// Interest or penalty rates cannot be negative.
    #[error("rates cannot be negative")]
    NegativeRate,

    /// Grace days cannot be negative.
    #[error("grace days cannot be negative")]
    NegativeGraceDays,

    /// No active financial configuration was supplied.
    ///
    /// Rates are never defaulted to zero; a missing configuration is always
    /// surfaced to the caller.
    #[error("no active financial configuration found")]
    MissingConfiguration,
}
