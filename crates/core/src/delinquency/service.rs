//! Delinquency accumulator, aging partition and ordering.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use rentfolio_shared::round2;
use rentfolio_shared::types::{ContractId, PropertyId, TenantId};

use super::types::{
    AgingBuckets, DelinquencyEntry, DelinquencyReport, DelinquencySort,
};
use crate::aggregate::{collation_key, rank_descending};
use crate::period::days_between;
use crate::records::{Client, Contract, Payment};

#[derive(Debug, Clone, Default)]
struct ContractArrears {
    days_late: i64,
    amount_owed: Decimal,
    overdue_payments: u64,
}

/// Fold-able accumulator behind the delinquency report.
///
/// Contracts and clients are folded first so entries can carry tenant and
/// property details; overdue payments are then grouped by contract in
/// first-seen order, which the default sort's tiebreaks rest on.
#[derive(Debug, Clone)]
pub struct DelinquencyAccumulator {
    evaluation_date: NaiveDate,
    minimum_days_late: i64,
    contract_details: HashMap<ContractId, (TenantId, PropertyId)>,
    tenant_names: HashMap<TenantId, String>,
    order: Vec<ContractId>,
    arrears: HashMap<ContractId, ContractArrears>,
}

impl DelinquencyAccumulator {
    /// Creates an empty accumulator.
    ///
    /// `minimum_days_late` below 1 is clamped to 1: a payment zero days late
    /// is not delinquent.
    #[must_use]
    pub fn new(evaluation_date: NaiveDate, minimum_days_late: i64) -> Self {
        Self {
            evaluation_date,
            minimum_days_late: minimum_days_late.max(1),
            contract_details: HashMap::new(),
            tenant_names: HashMap::new(),
            order: Vec::new(),
            arrears: HashMap::new(),
        }
    }

    /// Registers a contract's tenant and property for entry details.
    pub fn fold_contract(&mut self, contract: &Contract) {
        self.contract_details
            .insert(contract.id, (contract.tenant_id, contract.property_id));
    }

    /// Registers a client's display name.
    pub fn fold_client(&mut self, client: &Client) {
        self.tenant_names.insert(client.id, client.name.clone());
    }

    /// Folds an overdue payment into its contract's arrears.
    ///
    /// The contract's days late is the maximum over its payments; the amount
    /// owed sums principal plus the fee amounts stored on each record.
    pub fn fold_overdue_payment(&mut self, payment: &Payment) {
        let days_late = days_between(payment.due_date, self.evaluation_date).max(0);

        if !self.arrears.contains_key(&payment.contract_id) {
            self.order.push(payment.contract_id);
        }
        let entry = self.arrears.entry(payment.contract_id).or_default();
        entry.days_late = entry.days_late.max(days_late);
        entry.amount_owed += payment.amount_owed();
        entry.overdue_payments += 1;
    }

    /// Finalizes entries, filters below-minimum contracts, partitions the
    /// aging buckets and applies the requested ordering.
    #[must_use]
    pub fn finalize(mut self, sort: DelinquencySort) -> DelinquencyReport {
        let mut entries: Vec<DelinquencyEntry> = Vec::new();
        for contract_id in self.order {
            let Some(arrears) = self.arrears.remove(&contract_id) else {
                continue;
            };
            if arrears.days_late < self.minimum_days_late {
                continue;
            }

            let details = self.contract_details.get(&contract_id);
            let tenant_id = details.map(|(tenant, _)| *tenant);
            entries.push(DelinquencyEntry {
                contract_id,
                tenant_id,
                tenant_name: tenant_id.and_then(|id| self.tenant_names.get(&id).cloned()),
                property_id: details.map(|(_, property)| *property),
                days_late: arrears.days_late,
                amount_owed: round2(arrears.amount_owed),
                overdue_payments: arrears.overdue_payments,
            });
        }

        let mut aging = AgingBuckets::default();
        let mut total_owed = Decimal::ZERO;
        for entry in &entries {
            total_owed += entry.amount_owed;
            let bucket = match entry.days_late {
                ..=30 => &mut aging.days_1_to_30,
                31..=60 => &mut aging.days_31_to_60,
                61..=90 => &mut aging.days_61_to_90,
                _ => &mut aging.over_90,
            };
            bucket.contracts += 1;
            bucket.amount_owed += entry.amount_owed;
        }

        match sort {
            DelinquencySort::DaysLate => {
                rank_descending(&mut entries, |e| Decimal::from(e.days_late));
            }
            DelinquencySort::AmountOwed => rank_descending(&mut entries, |e| e.amount_owed),
            DelinquencySort::TenantName => entries.sort_by_key(|e| {
                collation_key(e.tenant_name.as_deref().unwrap_or_default())
            }),
        }

        DelinquencyReport {
            evaluation_date: self.evaluation_date,
            entries,
            aging,
            total_owed: round2(total_owed),
        }
    }
}
