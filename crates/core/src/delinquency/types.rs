//! Delinquency value objects.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentfolio_shared::types::{ContractId, PropertyId, TenantId};

/// Ordering applied to delinquency entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelinquencySort {
    /// Most days late first (default).
    #[default]
    DaysLate,
    /// Largest amount owed first.
    AmountOwed,
    /// Tenant name, locale-aware ascending.
    TenantName,
}

/// Parameters of a delinquency report run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DelinquencyQuery {
    /// Date overdue payments are measured against. `None` means today.
    pub evaluation_date: Option<NaiveDate>,
    /// Contracts below this many days late are excluded.
    pub minimum_days_late: i64,
    /// Entry ordering.
    pub sort: DelinquencySort,
}

impl Default for DelinquencyQuery {
    fn default() -> Self {
        Self {
            evaluation_date: None,
            minimum_days_late: 1,
            sort: DelinquencySort::default(),
        }
    }
}

/// One delinquent contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelinquencyEntry {
    /// Contract in arrears.
    pub contract_id: ContractId,
    /// Tenant on the contract, when the contract is known to the store.
    pub tenant_id: Option<TenantId>,
    /// Tenant display name, when known.
    pub tenant_name: Option<String>,
    /// Property under the contract, when known.
    pub property_id: Option<PropertyId>,
    /// Days late of the contract's most overdue payment.
    pub days_late: i64,
    /// Total outstanding across the contract's overdue payments, stored fees
    /// included.
    pub amount_owed: Decimal,
    /// Number of overdue payments on the contract.
    pub overdue_payments: u64,
}

/// One aging bucket: how many contracts fall in it and what they owe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgingBucket {
    /// Contracts whose days late fall in the bucket's range.
    pub contracts: u64,
    /// Summed amount owed by those contracts.
    pub amount_owed: Decimal,
}

/// The four-bucket aging partition.
///
/// Each contract lands in exactly one bucket by its days late; 30 days is
/// still the first bucket, 31 the second, and `over_90` starts at 91.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgingBuckets {
    /// 1 to 30 days late.
    pub days_1_to_30: AgingBucket,
    /// 31 to 60 days late.
    pub days_31_to_60: AgingBucket,
    /// 61 to 90 days late.
    pub days_61_to_90: AgingBucket,
    /// 91 or more days late.
    pub over_90: AgingBucket,
}

/// Complete delinquency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelinquencyReport {
    /// Date the arrears were measured against.
    pub evaluation_date: NaiveDate,
    /// Delinquent contracts, ordered per the query's sort.
    pub entries: Vec<DelinquencyEntry>,
    /// Aging partition over the same entries.
    pub aging: AgingBuckets,
    /// Total outstanding across all entries.
    pub total_owed: Decimal,
}
