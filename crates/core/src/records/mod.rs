//! Typed domain records consumed by the engine.
//!
//! All records here are immutable inputs owned by the external record store;
//! the engine reads snapshots and never mutates them.

pub mod types;

pub use types::{
    Client, Contract, ContractStatus, Expense, ExpenseCategory, ExpenseStatus,
    FinancialConfiguration, Payment, PaymentStatus, Property,
};
