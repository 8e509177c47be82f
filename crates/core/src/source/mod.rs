//! Record-store abstraction the engine reads from.
//!
//! Persistence lives outside the engine; reports only need filtered,
//! stably-ordered pages of records. The [`RecordStore`] trait is that seam,
//! and [`InMemoryStore`] is the reference implementation used by tests and
//! embedding callers.

pub mod filter;
pub mod memory;

pub use filter::{ContractFilter, ExpenseFilter, PaymentFilter, PropertyFilter};
pub use memory::InMemoryStore;

use crate::records::{Client, Contract, Expense, Payment, Property};

/// Read-only, page-oriented access to the record store.
///
/// Implementations must return records in a stable, repeatable order (by
/// primary key) so paging never skips or duplicates a record within one
/// report run. Retry policy for transient failures belongs to the
/// implementation; the engine treats any error as fatal for the in-progress
/// report.
pub trait RecordStore {
    /// Error produced by a failed page fetch.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches one page of payments matching `filter`.
    fn payments_page(
        &self,
        filter: &PaymentFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Payment>, Self::Error>;

    /// Fetches one page of expenses matching `filter`.
    fn expenses_page(
        &self,
        filter: &ExpenseFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Expense>, Self::Error>;

    /// Fetches one page of contracts matching `filter`.
    fn contracts_page(
        &self,
        filter: &ContractFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Contract>, Self::Error>;

    /// Fetches one page of properties matching `filter`.
    fn properties_page(
        &self,
        filter: &PropertyFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Property>, Self::Error>;

    /// Fetches one page of clients.
    fn clients_page(&self, offset: u64, limit: u64) -> Result<Vec<Client>, Self::Error>;
}
