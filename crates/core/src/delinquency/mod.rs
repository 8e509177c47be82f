//! Delinquency (accounts-receivable aging) report.

pub mod service;
pub mod types;

pub use service::DelinquencyAccumulator;
pub use types::{
    AgingBucket, AgingBuckets, DelinquencyEntry, DelinquencyQuery, DelinquencyReport,
    DelinquencySort,
};
