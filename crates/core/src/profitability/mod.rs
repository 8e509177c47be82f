//! Per-property profitability report.

pub mod service;
pub mod types;

pub use service::ProfitabilityAccumulator;
pub use types::{ProfitabilityRanking, PropertyProfitability};
