//! Period financial summary.

pub mod service;
pub mod types;

pub use service::PeriodSummaryAccumulator;
pub use types::PeriodSummary;
