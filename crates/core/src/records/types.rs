//! Domain record types.
//!
//! These mirror the record store's rows as explicit typed structs; shape
//! validation happens at the store boundary, never inside aggregation logic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentfolio_shared::types::{
    ConfigurationId, ContractId, ExpenseId, PaymentId, PropertyId, TenantId,
};

/// Status of a rent payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet due or not yet settled.
    Pending,
    /// Settled; `payment_date` is set.
    Paid,
    /// Past due with no payment recorded.
    Overdue,
    /// Cancelled; excluded from every report.
    Cancelled,
}

/// A rent payment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Contract this payment belongs to.
    pub contract_id: ContractId,
    /// Month the payment refers to (first-of-month date).
    pub reference_month: NaiveDate,
    /// Amount owed for the reference month.
    pub amount_due: Decimal,
    /// Amount actually paid, if any.
    pub amount_paid: Option<Decimal>,
    /// Date the payment was due.
    pub due_date: NaiveDate,
    /// Date the payment was made, if any.
    pub payment_date: Option<NaiveDate>,
    /// Current status.
    pub status: PaymentStatus,
    /// Interest stored when the payment went overdue.
    pub interest_amount: Decimal,
    /// Penalty stored when the payment went overdue.
    pub penalty_amount: Decimal,
}

impl Payment {
    /// Amount outstanding on an overdue payment: principal plus stored fees.
    #[must_use]
    pub fn amount_owed(&self) -> Decimal {
        self.amount_due + self.interest_amount + self.penalty_amount
    }

    /// Returns true if the record satisfies the status/date invariants:
    /// `Paid` ⇔ `payment_date` set; `Overdue` ⇒ no `payment_date`.
    #[must_use]
    pub fn status_consistent(&self) -> bool {
        match self.status {
            PaymentStatus::Paid => self.payment_date.is_some(),
            PaymentStatus::Overdue => self.payment_date.is_none(),
            PaymentStatus::Pending | PaymentStatus::Cancelled => true,
        }
    }
}

/// Expense category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Repairs and upkeep.
    Maintenance,
    /// Property taxes.
    Taxes,
    /// Insurance premiums.
    Insurance,
    /// Administration and management fees.
    Administration,
    /// Anything else.
    Other,
}

/// Status of a property expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Recorded but not yet paid.
    Pending,
    /// Paid out.
    Paid,
    /// Cancelled; excluded from every report.
    Cancelled,
}

/// A property expense record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Property the expense belongs to.
    pub property_id: PropertyId,
    /// Expense category.
    pub category: ExpenseCategory,
    /// Expense amount (always positive).
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub expense_date: NaiveDate,
    /// Date the expense was paid, if any.
    pub payment_date: Option<NaiveDate>,
    /// Current status.
    pub status: ExpenseStatus,
}

/// Status of a rental contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Contract in force.
    Active,
    /// Contract ended.
    Terminated,
}

/// A rental contract record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Contract ID.
    pub id: ContractId,
    /// Property under contract.
    pub property_id: PropertyId,
    /// Tenant on the contract.
    pub tenant_id: TenantId,
    /// Monthly rent amount.
    pub rent_amount: Decimal,
    /// Contract start date.
    pub start_date: NaiveDate,
    /// Contract end date.
    pub end_date: NaiveDate,
    /// Current status.
    pub status: ContractStatus,
}

impl Contract {
    /// Returns true if the contract's term intersects `[start, end)`.
    #[must_use]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date < end && self.end_date >= start
    }
}

/// A property record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Property ID.
    pub id: PropertyId,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Property type (e.g., "apartment", "house", "commercial").
    pub property_type: String,
}

/// A client (tenant) record, used for name display and ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Tenant ID.
    pub id: TenantId,
    /// Display name.
    pub name: String,
}

/// Active financial configuration for late-fee computation.
///
/// One active configuration exists per system owner; it is a read-only input
/// to the late-fee calculator. A missing configuration is an error, never a
/// set of default rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialConfiguration {
    /// Configuration ID.
    pub id: ConfigurationId,
    /// Monthly interest rate as a fraction (0.01 = 1% per month).
    pub monthly_interest_rate: Decimal,
    /// Flat penalty rate as a fraction (0.02 = 2% of the amount due).
    pub penalty_rate: Decimal,
    /// Days after the due date during which no fee accrues.
    pub grace_days: i64,
}
