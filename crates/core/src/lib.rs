//! Financial computation and reporting engine for Rentfolio.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. It turns read-only snapshots of payment, expense, contract
//! and property records into late-fee amounts, period financial summaries,
//! per-property profitability and delinquency/aging reports.
//!
//! # Modules
//!
//! - `records` - Typed domain records consumed by the engine
//! - `period` - Report windows and day/month arithmetic
//! - `latefee` - Interest and penalty calculation for late payments
//! - `aggregate` - Group-by, percentage and ranking primitives
//! - `summary` - Period financial summarizer
//! - `profitability` - Per-property profitability reporter
//! - `delinquency` - Overdue aggregation with aging buckets
//! - `source` - Record-store abstraction the engine reads from
//! - `batch` - Bounded-memory pagination driver
//! - `reports` - Report engine orchestrating the above

pub mod aggregate;
pub mod batch;
pub mod delinquency;
pub mod latefee;
pub mod period;
pub mod profitability;
pub mod records;
pub mod reports;
pub mod source;
pub mod summary;
