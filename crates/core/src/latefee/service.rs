//! Late-fee calculation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use rentfolio_shared::round2;

use super::error::FeeError;
use super::types::LateFeeBreakdown;
use crate::period::days_between;
use crate::records::{FinancialConfiguration, Payment};

/// Days in the proration month. Interest scales linearly with effective late
/// days over this base, unbounded by whole-month buckets.
const PRORATION_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Late-fee calculation service.
///
/// Pure and deterministic: identical inputs always yield identical outputs,
/// so reports may recompute fees freely without persisting them.
pub struct LateFeeService;

impl LateFeeService {
    /// Computes interest and penalty owed on a late payment.
    ///
    /// The first `grace_days` after the due date accrue nothing, even if the
    /// payment is nominally late. Past the grace window the penalty is a flat
    /// fraction of the amount due (applied once), and interest accrues
    /// linearly: `amount_due * monthly_interest_rate * effective_days / 30`.
    ///
    /// # Errors
    ///
    /// Returns a [`FeeError`] naming the offending field when the amount is
    /// not positive, or days/rates/grace are negative.
    pub fn compute(
        amount_due: Decimal,
        days_late: i64,
        monthly_interest_rate: Decimal,
        penalty_rate: Decimal,
        grace_days: i64,
    ) -> Result<LateFeeBreakdown, FeeError> {
        if amount_due <= Decimal::ZERO {
            return Err(FeeError::NonPositiveAmountDue);
        }
        if days_late < 0 {
            return Err(FeeError::NegativeDaysLate);
        }
        if monthly_interest_rate < Decimal::ZERO || penalty_rate < Decimal::ZERO {
            return Err(FeeError::NegativeRate);
        }
        if grace_days < 0 {
            return Err(FeeError::NegativeGraceDays);
        }

        let effective_days = (days_late - grace_days).max(0);
        if effective_days == 0 {
            return Ok(LateFeeBreakdown {
                interest: Decimal::ZERO,
                penalty: Decimal::ZERO,
                total: amount_due,
            });
        }

        let penalty = round2(amount_due * penalty_rate);
        let interest = round2(
            amount_due * monthly_interest_rate * Decimal::from(effective_days)
                / PRORATION_MONTH_DAYS,
        );

        Ok(LateFeeBreakdown {
            interest,
            penalty,
            total: amount_due + interest + penalty,
        })
    }

    /// Computes the fee using the active financial configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::MissingConfiguration`] when no configuration is
    /// supplied; rates are never silently defaulted. Input violations surface
    /// as in [`Self::compute`].
    pub fn compute_with_config(
        amount_due: Decimal,
        days_late: i64,
        config: Option<&FinancialConfiguration>,
    ) -> Result<LateFeeBreakdown, FeeError> {
        let config = config.ok_or(FeeError::MissingConfiguration)?;
        Self::compute(
            amount_due,
            days_late,
            config.monthly_interest_rate,
            config.penalty_rate,
            config.grace_days,
        )
    }

    /// Recommends fee amounts for a payment as of `evaluation_date`.
    ///
    /// Days late are derived from the payment's due date (zero if not yet
    /// due). The result is a recommendation only; committing new
    /// interest/penalty values back to the record is the store's
    /// responsibility, invoked by the caller.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::compute_with_config`].
    pub fn recommend_for_payment(
        payment: &Payment,
        evaluation_date: NaiveDate,
        config: Option<&FinancialConfiguration>,
    ) -> Result<LateFeeBreakdown, FeeError> {
        let days_late = days_between(payment.due_date, evaluation_date).max(0);
        Self::compute_with_config(payment.amount_due, days_late, config)
    }
}
