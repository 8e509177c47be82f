//! Period summary accumulator.

use std::collections::HashSet;

use rust_decimal::Decimal;

use rentfolio_shared::round2;
use rentfolio_shared::types::ContractId;

use super::types::PeriodSummary;
use crate::aggregate::percentage;
use crate::period::PeriodWindow;
use crate::records::{Contract, Expense, Payment};

/// Fold-able accumulator behind [`PeriodSummary`].
///
/// The record scans feed it one record at a time; every fold is commutative,
/// so the finished summary does not depend on page size or page order. The
/// store filters select which records reach which fold; the accumulator
/// itself only sums.
#[derive(Debug, Clone)]
pub struct PeriodSummaryAccumulator {
    window: PeriodWindow,
    revenue: Decimal,
    expenses: Decimal,
    delinquency_value: Decimal,
    delinquent_contracts: HashSet<ContractId>,
    active_contracts: u64,
}

impl PeriodSummaryAccumulator {
    /// Creates an empty accumulator for the window.
    #[must_use]
    pub fn new(window: PeriodWindow) -> Self {
        Self {
            window,
            revenue: Decimal::ZERO,
            expenses: Decimal::ZERO,
            delinquency_value: Decimal::ZERO,
            delinquent_contracts: HashSet::new(),
            active_contracts: 0,
        }
    }

    /// Folds a paid payment into revenue.
    ///
    /// Revenue counts what was actually received, so a missing `amount_paid`
    /// contributes nothing even on a nominally paid record.
    pub fn fold_paid_payment(&mut self, payment: &Payment) {
        self.revenue += payment.amount_paid.unwrap_or(Decimal::ZERO);
    }

    /// Folds an overdue payment into the delinquency figures.
    ///
    /// Uses the fee amounts stored on the record; nothing is recomputed here.
    pub fn fold_overdue_payment(&mut self, payment: &Payment) {
        self.delinquency_value += payment.amount_owed();
        self.delinquent_contracts.insert(payment.contract_id);
    }

    /// Folds a paid expense into the expense total.
    pub fn fold_paid_expense(&mut self, expense: &Expense) {
        self.expenses += expense.amount;
    }

    /// Counts an active contract toward the delinquency-rate denominator.
    pub fn fold_active_contract(&mut self, _contract: &Contract) {
        self.active_contracts += 1;
    }

    /// Finalizes the summary: rounds money, derives net profit and the two
    /// rates. An accumulator that saw no records yields an all-zero summary.
    #[must_use]
    pub fn finalize(self) -> PeriodSummary {
        let revenue = round2(self.revenue);
        let expenses = round2(self.expenses);
        let net_profit = round2(revenue - expenses);
        let delinquent = self.delinquent_contracts.len() as u64;

        PeriodSummary {
            start: self.window.start(),
            end: self.window.end(),
            revenue,
            expenses,
            net_profit,
            margin_percent: percentage(net_profit, revenue),
            delinquency_value: round2(self.delinquency_value),
            delinquent_contracts: delinquent,
            active_contracts: self.active_contracts,
            delinquency_rate_percent: percentage(
                Decimal::from(delinquent),
                Decimal::from(self.active_contracts),
            ),
        }
    }
}
