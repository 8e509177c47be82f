//! Common type definitions.

pub mod id;
pub mod money;

pub use id::{ConfigurationId, ContractId, ExpenseId, PaymentId, PropertyId, TenantId};
pub use money::round2;
