//! Shared types for Rentfolio.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Monetary rounding helpers with decimal precision

pub mod types;

pub use types::money::round2;
