//! Period summary value objects.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial summary of a reporting window.
///
/// Plain data, fully computed; every money field is rounded to 2 decimal
/// places and every percentage is already expressed in points (83.70, not
/// 0.8370).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Window start (inclusive).
    pub start: NaiveDate,
    /// Window end (exclusive).
    pub end: NaiveDate,
    /// Total received from paid payments in the window.
    pub revenue: Decimal,
    /// Total paid expenses in the window.
    pub expenses: Decimal,
    /// `revenue - expenses`.
    pub net_profit: Decimal,
    /// Net profit as a percentage of revenue; zero when revenue is zero.
    pub margin_percent: Decimal,
    /// Total outstanding on overdue payments, stored fees included.
    pub delinquency_value: Decimal,
    /// Distinct contracts with at least one overdue payment.
    pub delinquent_contracts: u64,
    /// Distinct active contracts.
    pub active_contracts: u64,
    /// Delinquent contracts as a percentage of active contracts.
    pub delinquency_rate_percent: Decimal,
}
