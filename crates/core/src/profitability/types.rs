//! Profitability value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentfolio_shared::types::PropertyId;

/// Metric a profitability report is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitabilityRanking {
    /// Order by margin percentage (default).
    #[default]
    Margin,
    /// Order by gross revenue.
    Revenue,
    /// Order by net profit.
    Profit,
}

/// One property's financial performance over the reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyProfitability {
    /// Property ID.
    pub property_id: PropertyId,
    /// Street address, for display.
    pub address: String,
    /// City, for display.
    pub city: String,
    /// Rent received through the property's contracts.
    pub revenue: Decimal,
    /// Paid expenses charged to the property.
    pub expenses: Decimal,
    /// `revenue - expenses`.
    pub profit: Decimal,
    /// Profit as a percentage of revenue; zero when revenue is zero.
    pub margin_percent: Decimal,
    /// Months with at least one paid payment, as a percentage of the months
    /// the window spans.
    pub occupancy_percent: Decimal,
}
