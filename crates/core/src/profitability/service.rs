//! Profitability accumulator and ranking.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use rentfolio_shared::round2;
use rentfolio_shared::types::{ContractId, PropertyId};

use super::types::{ProfitabilityRanking, PropertyProfitability};
use crate::aggregate::{percentage, rank_descending};
use crate::period::PeriodWindow;
use crate::records::{Contract, Expense, Payment, Property};

/// Fold-able accumulator behind the profitability report.
///
/// Scan order matters: properties and contracts must be folded before
/// payments, because revenue is attributed to a property through the
/// contract-to-property map built from the contract scan. The report engine
/// enforces this ordering.
#[derive(Debug, Clone)]
pub struct ProfitabilityAccumulator {
    window: PeriodWindow,
    /// Properties in first-seen (store) order; ranking tiebreaks rest on it.
    properties: Vec<Property>,
    contract_property: HashMap<ContractId, PropertyId>,
    revenue: HashMap<PropertyId, Decimal>,
    expenses: HashMap<PropertyId, Decimal>,
    /// Distinct reference months with a paid payment, per property.
    occupied_months: HashMap<PropertyId, HashSet<NaiveDate>>,
}

impl ProfitabilityAccumulator {
    /// Creates an empty accumulator for the window.
    #[must_use]
    pub fn new(window: PeriodWindow) -> Self {
        Self {
            window,
            properties: Vec::new(),
            contract_property: HashMap::new(),
            revenue: HashMap::new(),
            expenses: HashMap::new(),
            occupied_months: HashMap::new(),
        }
    }

    /// Registers a property. Every registered property appears in the report
    /// even with zero activity.
    pub fn fold_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Registers a contract so later payments can be attributed to its
    /// property.
    pub fn fold_contract(&mut self, contract: &Contract) {
        self.contract_property
            .insert(contract.id, contract.property_id);
    }

    /// Folds a paid payment into its property's revenue and occupancy.
    ///
    /// A payment on a contract the contract scan never produced cannot be
    /// mapped to a property and is skipped.
    pub fn fold_paid_payment(&mut self, payment: &Payment) {
        let Some(&property_id) = self.contract_property.get(&payment.contract_id) else {
            tracing::debug!(
                payment_id = %payment.id,
                contract_id = %payment.contract_id,
                "payment on unknown contract skipped"
            );
            return;
        };

        let amount = payment.amount_paid.unwrap_or(Decimal::ZERO);
        *self.revenue.entry(property_id).or_insert(Decimal::ZERO) += amount;
        self.occupied_months
            .entry(property_id)
            .or_default()
            .insert(payment.reference_month);
    }

    /// Folds a paid expense into its property's expense total.
    pub fn fold_paid_expense(&mut self, expense: &Expense) {
        *self
            .expenses
            .entry(expense.property_id)
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    /// Finalizes per-property entries and ranks them.
    ///
    /// The sort is stable and descending on the chosen metric; ties keep the
    /// store's property order.
    #[must_use]
    pub fn finalize(self, ranking: ProfitabilityRanking) -> Vec<PropertyProfitability> {
        let months_in_window = Decimal::from(self.window.months_spanned());

        let mut entries: Vec<PropertyProfitability> = self
            .properties
            .into_iter()
            .map(|property| {
                let revenue = round2(
                    self.revenue
                        .get(&property.id)
                        .copied()
                        .unwrap_or(Decimal::ZERO),
                );
                let expenses = round2(
                    self.expenses
                        .get(&property.id)
                        .copied()
                        .unwrap_or(Decimal::ZERO),
                );
                let profit = round2(revenue - expenses);
                let occupied = self
                    .occupied_months
                    .get(&property.id)
                    .map_or(0, HashSet::len);

                PropertyProfitability {
                    property_id: property.id,
                    address: property.address,
                    city: property.city,
                    revenue,
                    expenses,
                    profit,
                    margin_percent: percentage(profit, revenue),
                    occupancy_percent: percentage(Decimal::from(occupied), months_in_window),
                }
            })
            .collect();

        match ranking {
            ProfitabilityRanking::Margin => rank_descending(&mut entries, |e| e.margin_percent),
            ProfitabilityRanking::Revenue => rank_descending(&mut entries, |e| e.revenue),
            ProfitabilityRanking::Profit => rank_descending(&mut entries, |e| e.profit),
        }
        entries
    }
}
