//! In-memory record store.

use std::convert::Infallible;

use rust_decimal::Decimal;

use super::filter::{ContractFilter, ExpenseFilter, PaymentFilter, PropertyFilter};
use super::RecordStore;
use crate::records::{Client, Contract, Expense, Payment, Property};

/// Record store backed by plain vectors.
///
/// Records are sorted by id at construction so page order is stable and
/// repeatable across fetches, matching the contract every store
/// implementation must honor. Record invariants (payment status/date
/// consistency, positive expense amounts, non-inverted contract terms) are
/// checked here, at the store boundary, so aggregation logic downstream can
/// assume clean records. The checks are debug-build assertions; release
/// builds trust the producing store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    payments: Vec<Payment>,
    expenses: Vec<Expense>,
    contracts: Vec<Contract>,
    properties: Vec<Property>,
    clients: Vec<Client>,
}

impl InMemoryStore {
    /// Builds a store over the given record snapshots.
    #[must_use]
    pub fn new(
        mut payments: Vec<Payment>,
        mut expenses: Vec<Expense>,
        mut contracts: Vec<Contract>,
        mut properties: Vec<Property>,
        mut clients: Vec<Client>,
    ) -> Self {
        debug_assert!(
            payments.iter().all(Payment::status_consistent),
            "payment status/date invariants violated at the store boundary"
        );
        debug_assert!(
            expenses.iter().all(|e| e.amount > Decimal::ZERO),
            "expense amounts must be positive at the store boundary"
        );
        debug_assert!(
            contracts.iter().all(|c| c.start_date <= c.end_date),
            "contract terms must not be inverted at the store boundary"
        );

        payments.sort_by_key(|p| p.id);
        expenses.sort_by_key(|e| e.id);
        contracts.sort_by_key(|c| c.id);
        properties.sort_by_key(|p| p.id);
        clients.sort_by_key(|c| c.id);

        Self {
            payments,
            expenses,
            contracts,
            properties,
            clients,
        }
    }

    fn page<T: Clone>(items: &[T], matches: impl Fn(&T) -> bool, offset: u64, limit: u64) -> Vec<T> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        items
            .iter()
            .filter(|item| matches(item))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl RecordStore for InMemoryStore {
    type Error = Infallible;

    fn payments_page(
        &self,
        filter: &PaymentFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Payment>, Self::Error> {
        Ok(Self::page(&self.payments, |p| filter.matches(p), offset, limit))
    }

    fn expenses_page(
        &self,
        filter: &ExpenseFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Expense>, Self::Error> {
        Ok(Self::page(&self.expenses, |e| filter.matches(e), offset, limit))
    }

    fn contracts_page(
        &self,
        filter: &ContractFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Contract>, Self::Error> {
        Ok(Self::page(&self.contracts, |c| filter.matches(c), offset, limit))
    }

    fn properties_page(
        &self,
        filter: &PropertyFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Property>, Self::Error> {
        Ok(Self::page(&self.properties, |p| filter.matches(p), offset, limit))
    }

    fn clients_page(&self, offset: u64, limit: u64) -> Result<Vec<Client>, Self::Error> {
        Ok(Self::page(&self.clients, |_| true, offset, limit))
    }
}
