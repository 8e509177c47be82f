//! Report orchestration.

pub mod error;
pub mod service;

pub use error::ReportError;
pub use service::ReportEngine;
