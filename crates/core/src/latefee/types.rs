//! Late-fee result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentfolio_shared::types::{ContractId, PaymentId};

/// Breakdown of the amount owed on a late payment.
///
/// Computed, never mutated after construction. All fields are rounded to
/// 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeeBreakdown {
    /// Prorated interest on the amount due.
    pub interest: Decimal,
    /// Flat penalty, applied once regardless of how late.
    pub penalty: Decimal,
    /// Amount due plus interest plus penalty.
    pub total: Decimal,
}

/// Recommended fee amounts for one overdue payment.
///
/// A recommendation only: committing the amounts back to the payment record
/// is the store's job, invoked by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecommendation {
    /// Payment the recommendation is for.
    pub payment_id: PaymentId,
    /// Contract the payment belongs to.
    pub contract_id: ContractId,
    /// Days late as of the evaluation date.
    pub days_late: i64,
    /// Recommended interest, penalty and total.
    pub breakdown: LateFeeBreakdown,
}
