//! Record filters understood by every store implementation.
//!
//! Filters cover the engine's needs exactly: date-range on the entity's
//! primary date fields, equality on property/contract ids and on status.

use chrono::NaiveDate;

use rentfolio_shared::types::{ContractId, PropertyId};

use crate::period::PeriodWindow;
use crate::records::{
    Contract, ContractStatus, Expense, ExpenseStatus, Payment, PaymentStatus, Property,
};

/// Filter for payment pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentFilter {
    /// Match only this status.
    pub status: Option<PaymentStatus>,
    /// Match only payments on this contract.
    pub contract_id: Option<ContractId>,
    /// Match only payments whose payment date falls in this window.
    pub paid_in: Option<PeriodWindow>,
    /// Match only payments whose due date falls in this window.
    pub due_in: Option<PeriodWindow>,
    /// Match only payments due on or before this date.
    pub due_on_or_before: Option<NaiveDate>,
}

impl PaymentFilter {
    /// Returns true if the payment satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, payment: &Payment) -> bool {
        if self.status.is_some_and(|status| payment.status != status) {
            return false;
        }
        if self.contract_id.is_some_and(|id| payment.contract_id != id) {
            return false;
        }
        if let Some(window) = self.paid_in {
            if !payment.payment_date.is_some_and(|date| window.contains(date)) {
                return false;
            }
        }
        if let Some(window) = self.due_in {
            if !window.contains(payment.due_date) {
                return false;
            }
        }
        if self.due_on_or_before.is_some_and(|cutoff| payment.due_date > cutoff) {
            return false;
        }
        true
    }
}

/// Filter for expense pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseFilter {
    /// Match only this status.
    pub status: Option<ExpenseStatus>,
    /// Match only expenses on this property.
    pub property_id: Option<PropertyId>,
    /// Match only expenses whose expense date falls in this window.
    pub incurred_in: Option<PeriodWindow>,
}

impl ExpenseFilter {
    /// Returns true if the expense satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        if self.status.is_some_and(|status| expense.status != status) {
            return false;
        }
        if self.property_id.is_some_and(|id| expense.property_id != id) {
            return false;
        }
        if let Some(window) = self.incurred_in {
            if !window.contains(expense.expense_date) {
                return false;
            }
        }
        true
    }
}

/// Filter for contract pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractFilter {
    /// Match only this status.
    pub status: Option<ContractStatus>,
    /// Match only contracts on this property.
    pub property_id: Option<PropertyId>,
}

impl ContractFilter {
    /// Returns true if the contract satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, contract: &Contract) -> bool {
        if self.status.is_some_and(|status| contract.status != status) {
            return false;
        }
        if self.property_id.is_some_and(|id| contract.property_id != id) {
            return false;
        }
        true
    }
}

/// Filter for property pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyFilter {
    /// Match only this property.
    pub property_id: Option<PropertyId>,
}

impl PropertyFilter {
    /// Returns true if the property satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        !self.property_id.is_some_and(|id| property.id != id)
    }
}
