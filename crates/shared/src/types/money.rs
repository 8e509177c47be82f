//! Monetary rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; every monetary value the engine
//! returns passes through [`round2`] before leaving a report.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places using round-half-up.
///
/// Half-up here means midpoints round away from zero, matching how rent
/// ledgers are expected to round currency:
/// - 2.345 → 2.35
/// - 2.344 → 2.34
/// - -2.345 → -2.35
///
/// The result always carries scale 2 (`4600` becomes `4600.00`), so
/// numerically equal amounts serialize identically regardless of the scale
/// they arrived with. Applying [`round2`] twice yields the same result as
/// applying it once.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never raises the scale of low-scale inputs; pin it at 2.
    rounded.rescale(2);
    rounded
}
