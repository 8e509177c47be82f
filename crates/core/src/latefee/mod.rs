//! Interest and penalty calculation for late rent payments.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::FeeError;
pub use service::LateFeeService;
pub use types::{FeeRecommendation, LateFeeBreakdown};
