//! The report engine.

use chrono::{NaiveDate, Utc};

use rentfolio_shared::types::PropertyId;

use super::error::ReportError;
use crate::batch::{fold_pages, DEFAULT_PAGE_SIZE};
use crate::delinquency::{DelinquencyAccumulator, DelinquencyQuery, DelinquencyReport};
use crate::latefee::{FeeError, FeeRecommendation, LateFeeService};
use crate::period::{days_between, PeriodWindow};
use crate::profitability::{ProfitabilityAccumulator, ProfitabilityRanking, PropertyProfitability};
use crate::records::{ContractStatus, ExpenseStatus, FinancialConfiguration, PaymentStatus};
use crate::source::{ContractFilter, ExpenseFilter, PaymentFilter, PropertyFilter, RecordStore};
use crate::summary::{PeriodSummary, PeriodSummaryAccumulator};

/// Generates reports over a record store.
///
/// The engine owns orchestration only: window validation up front, then
/// paged scans feeding the report accumulators. Every scan runs through the
/// batch driver, so memory stays bounded by one page plus the accumulator
/// regardless of dataset size.
#[derive(Debug, Clone)]
pub struct ReportEngine<S> {
    store: S,
    page_size: u64,
}

impl<S: RecordStore> ReportEngine<S> {
    /// Creates an engine with the default page size.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_page_size(store, DEFAULT_PAGE_SIZE)
    }

    /// Creates an engine fetching `page_size` records per page.
    #[must_use]
    pub fn with_page_size(store: S, page_size: u64) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
        }
    }

    /// Generates the financial summary for `[start, end)`.
    ///
    /// # Errors
    ///
    /// [`ReportError::InvalidDateRange`] when `end <= start` (checked before
    /// any fetch), or [`ReportError::Generation`] when a page fetch fails.
    pub fn period_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodSummary, ReportError> {
        let window = PeriodWindow::new(start, end)?;
        tracing::debug!(%start, %end, "generating period summary");

        let mut acc = PeriodSummaryAccumulator::new(window);

        let paid = PaymentFilter {
            status: Some(PaymentStatus::Paid),
            paid_in: Some(window),
            ..PaymentFilter::default()
        };
        acc = fold_pages(
            |offset, limit| self.store.payments_page(&paid, offset, limit),
            self.page_size,
            acc,
            |acc, payment| acc.fold_paid_payment(&payment),
        )?;

        let overdue = PaymentFilter {
            status: Some(PaymentStatus::Overdue),
            ..PaymentFilter::default()
        };
        acc = fold_pages(
            |offset, limit| self.store.payments_page(&overdue, offset, limit),
            self.page_size,
            acc,
            |acc, payment| acc.fold_overdue_payment(&payment),
        )?;

        let expenses = ExpenseFilter {
            status: Some(ExpenseStatus::Paid),
            incurred_in: Some(window),
            ..ExpenseFilter::default()
        };
        acc = fold_pages(
            |offset, limit| self.store.expenses_page(&expenses, offset, limit),
            self.page_size,
            acc,
            |acc, expense| acc.fold_paid_expense(&expense),
        )?;

        let active = ContractFilter {
            status: Some(ContractStatus::Active),
            ..ContractFilter::default()
        };
        acc = fold_pages(
            |offset, limit| self.store.contracts_page(&active, offset, limit),
            self.page_size,
            acc,
            |acc, contract| acc.fold_active_contract(&contract),
        )?;

        Ok(acc.finalize())
    }

    /// Generates per-property profitability for `[start, end)`, optionally
    /// restricted to one property, ranked by `ranking`.
    ///
    /// Properties with no activity in the window appear with zero figures.
    ///
    /// # Errors
    ///
    /// [`ReportError::InvalidDateRange`] when `end <= start` (checked before
    /// any fetch), or [`ReportError::Generation`] when a page fetch fails.
    pub fn property_profitability(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        property_id: Option<PropertyId>,
        ranking: ProfitabilityRanking,
    ) -> Result<Vec<PropertyProfitability>, ReportError> {
        let window = PeriodWindow::new(start, end)?;
        tracing::debug!(%start, %end, ?property_id, "generating profitability report");

        let mut acc = ProfitabilityAccumulator::new(window);

        let properties = PropertyFilter { property_id };
        acc = fold_pages(
            |offset, limit| self.store.properties_page(&properties, offset, limit),
            self.page_size,
            acc,
            ProfitabilityAccumulator::fold_property,
        )?;

        // Contracts before payments: attribution needs the full map.
        let contracts = ContractFilter {
            property_id,
            ..ContractFilter::default()
        };
        acc = fold_pages(
            |offset, limit| self.store.contracts_page(&contracts, offset, limit),
            self.page_size,
            acc,
            |acc, contract| acc.fold_contract(&contract),
        )?;

        let paid = PaymentFilter {
            status: Some(PaymentStatus::Paid),
            paid_in: Some(window),
            ..PaymentFilter::default()
        };
        acc = fold_pages(
            |offset, limit| self.store.payments_page(&paid, offset, limit),
            self.page_size,
            acc,
            |acc, payment| acc.fold_paid_payment(&payment),
        )?;

        let expenses = ExpenseFilter {
            status: Some(ExpenseStatus::Paid),
            property_id,
            incurred_in: Some(window),
        };
        acc = fold_pages(
            |offset, limit| self.store.expenses_page(&expenses, offset, limit),
            self.page_size,
            acc,
            |acc, expense| acc.fold_paid_expense(&expense),
        )?;

        Ok(acc.finalize(ranking))
    }

    /// Recommends late-fee amounts for every overdue payment as of
    /// `evaluation_date` (today when `None`).
    ///
    /// # Errors
    ///
    /// [`ReportError::Fee`] when no configuration is supplied or a payment
    /// record fails the calculator's input checks, or
    /// [`ReportError::Generation`] when a page fetch fails. Either way no
    /// partial recommendation list is returned.
    pub fn late_fee_recommendations(
        &self,
        evaluation_date: Option<NaiveDate>,
        config: Option<&FinancialConfiguration>,
    ) -> Result<Vec<FeeRecommendation>, ReportError> {
        let config = config.ok_or(FeeError::MissingConfiguration)?;
        let evaluation_date = evaluation_date.unwrap_or_else(|| Utc::now().date_naive());
        tracing::debug!(%evaluation_date, "computing late-fee recommendations");

        let overdue = PaymentFilter {
            status: Some(PaymentStatus::Overdue),
            due_on_or_before: Some(evaluation_date),
            ..PaymentFilter::default()
        };
        let (recommendations, failure) = fold_pages(
            |offset, limit| self.store.payments_page(&overdue, offset, limit),
            self.page_size,
            (Vec::new(), None::<FeeError>),
            |(recommendations, failure), payment| {
                if failure.is_some() {
                    return;
                }
                match LateFeeService::recommend_for_payment(
                    &payment,
                    evaluation_date,
                    Some(config),
                ) {
                    Ok(breakdown) => recommendations.push(FeeRecommendation {
                        payment_id: payment.id,
                        contract_id: payment.contract_id,
                        days_late: days_between(payment.due_date, evaluation_date).max(0),
                        breakdown,
                    }),
                    Err(err) => *failure = Some(err),
                }
            },
        )?;

        if let Some(err) = failure {
            return Err(err.into());
        }
        Ok(recommendations)
    }

    /// Generates the delinquency report for the query.
    ///
    /// # Errors
    ///
    /// [`ReportError::Generation`] when a page fetch fails.
    pub fn delinquency(&self, query: DelinquencyQuery) -> Result<DelinquencyReport, ReportError> {
        let evaluation_date = query
            .evaluation_date
            .unwrap_or_else(|| Utc::now().date_naive());
        tracing::debug!(
            %evaluation_date,
            minimum_days_late = query.minimum_days_late,
            "generating delinquency report"
        );

        let mut acc = DelinquencyAccumulator::new(evaluation_date, query.minimum_days_late);

        let contracts = ContractFilter::default();
        acc = fold_pages(
            |offset, limit| self.store.contracts_page(&contracts, offset, limit),
            self.page_size,
            acc,
            |acc, contract| acc.fold_contract(&contract),
        )?;

        acc = fold_pages(
            |offset, limit| self.store.clients_page(offset, limit),
            self.page_size,
            acc,
            |acc, client| acc.fold_client(&client),
        )?;

        let overdue = PaymentFilter {
            status: Some(PaymentStatus::Overdue),
            due_on_or_before: Some(evaluation_date),
            ..PaymentFilter::default()
        };
        acc = fold_pages(
            |offset, limit| self.store.payments_page(&overdue, offset, limit),
            self.page_size,
            acc,
            |acc, payment| acc.fold_overdue_payment(&payment),
        )?;

        Ok(acc.finalize(query.sort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use rentfolio_shared::types::{
        ConfigurationId, ContractId, ExpenseId, PaymentId, PropertyId, TenantId,
    };
    use crate::delinquency::DelinquencySort;
    use crate::records::{
        Client, Contract, Expense, ExpenseCategory, Payment, Property,
    };
    use crate::source::InMemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn paid_payment(contract_id: ContractId, on: NaiveDate, amount: Decimal) -> Payment {
        Payment {
            id: PaymentId::new(),
            contract_id,
            reference_month: date(2026, 1, 1),
            amount_due: amount,
            amount_paid: Some(amount),
            due_date: on,
            payment_date: Some(on),
            status: PaymentStatus::Paid,
            interest_amount: Decimal::ZERO,
            penalty_amount: Decimal::ZERO,
        }
    }

    fn overdue_payment(contract_id: ContractId, due: NaiveDate, amount: Decimal) -> Payment {
        Payment {
            id: PaymentId::new(),
            contract_id,
            reference_month: date(2025, 12, 1),
            amount_due: amount,
            amount_paid: None,
            due_date: due,
            payment_date: None,
            status: PaymentStatus::Overdue,
            interest_amount: dec!(3),
            penalty_amount: dec!(20),
        }
    }

    fn paid_expense(property_id: PropertyId, on: NaiveDate, amount: Decimal) -> Expense {
        Expense {
            id: ExpenseId::new(),
            property_id,
            category: ExpenseCategory::Maintenance,
            amount,
            expense_date: on,
            payment_date: Some(on),
            status: ExpenseStatus::Paid,
        }
    }

    fn contract(property_id: PropertyId, tenant_id: TenantId) -> Contract {
        Contract {
            id: ContractId::new(),
            property_id,
            tenant_id,
            rent_amount: dec!(1000),
            start_date: date(2025, 6, 1),
            end_date: date(2026, 12, 31),
            status: ContractStatus::Active,
        }
    }

    fn property(address: &str) -> Property {
        Property {
            id: PropertyId::new(),
            address: address.to_owned(),
            city: "Lisboa".to_owned(),
            property_type: "apartment".to_owned(),
        }
    }

    /// Store whose names are January 2026: four paid rents, four paid
    /// expenses, one two-payment delinquent contract.
    fn seeded_store() -> InMemoryStore {
        let prop_a = property("Rua das Flores 10");
        let prop_b = property("Avenida Central 55");
        let tenant_a = TenantId::new();
        let tenant_b = TenantId::new();
        let lease_a = contract(prop_a.id, tenant_a);
        let lease_b = contract(prop_b.id, tenant_b);

        let mut payments = vec![
            paid_payment(lease_a.id, date(2026, 1, 5), dec!(1000)),
            paid_payment(lease_a.id, date(2026, 1, 6), dec!(1200)),
            paid_payment(lease_b.id, date(2026, 1, 7), dec!(1100)),
            paid_payment(lease_b.id, date(2026, 1, 8), dec!(1300)),
        ];
        payments.push(overdue_payment(lease_b.id, date(2025, 12, 5), dec!(1000)));
        payments.push(overdue_payment(lease_b.id, date(2026, 1, 5), dec!(1000)));

        let expenses = vec![
            paid_expense(prop_a.id, date(2026, 1, 10), dec!(200)),
            paid_expense(prop_a.id, date(2026, 1, 11), dec!(150)),
            paid_expense(prop_b.id, date(2026, 1, 12), dec!(180)),
            paid_expense(prop_b.id, date(2026, 1, 13), dec!(220)),
        ];

        InMemoryStore::new(
            payments,
            expenses,
            vec![lease_a, lease_b],
            vec![prop_a, prop_b],
            vec![
                Client {
                    id: tenant_a,
                    name: "Maria Santos".to_owned(),
                },
                Client {
                    id: tenant_b,
                    name: "Álvaro Pinto".to_owned(),
                },
            ],
        )
    }

    #[test]
    fn test_period_summary_scenario() {
        let engine = ReportEngine::new(seeded_store());
        let summary = engine
            .period_summary(date(2026, 1, 1), date(2026, 2, 1))
            .unwrap();

        assert_eq!(summary.revenue, dec!(4600.00));
        assert_eq!(summary.expenses, dec!(750.00));
        assert_eq!(summary.net_profit, dec!(3850.00));
        assert_eq!(summary.margin_percent, dec!(83.70));
        // One of the two active contracts has overdue payments.
        assert_eq!(summary.delinquency_value, dec!(2046.00));
        assert_eq!(summary.delinquent_contracts, 1);
        assert_eq!(summary.active_contracts, 2);
        assert_eq!(summary.delinquency_rate_percent, dec!(50.00));
    }

    #[test]
    fn test_summary_is_page_size_independent() {
        let store = seeded_store();
        let reference = ReportEngine::with_page_size(store.clone(), 1000)
            .period_summary(date(2026, 1, 1), date(2026, 2, 1))
            .unwrap();

        for page_size in [1, 7, 10_000] {
            let summary = ReportEngine::with_page_size(store.clone(), page_size)
                .period_summary(date(2026, 1, 1), date(2026, 2, 1))
                .unwrap();
            assert_eq!(summary, reference, "page size {page_size} diverged");
        }
    }

    #[test]
    fn test_invalid_window_rejected_before_fetch() {
        #[derive(Debug, thiserror::Error)]
        #[error("store must not be touched")]
        struct MustNotFetch;

        struct FailingStore;
        impl RecordStore for FailingStore {
            type Error = MustNotFetch;

            fn payments_page(
                &self,
                _: &PaymentFilter,
                _: u64,
                _: u64,
            ) -> Result<Vec<Payment>, Self::Error> {
                Err(MustNotFetch)
            }
            fn expenses_page(
                &self,
                _: &ExpenseFilter,
                _: u64,
                _: u64,
            ) -> Result<Vec<Expense>, Self::Error> {
                Err(MustNotFetch)
            }
            fn contracts_page(
                &self,
                _: &ContractFilter,
                _: u64,
                _: u64,
            ) -> Result<Vec<Contract>, Self::Error> {
                Err(MustNotFetch)
            }
            fn properties_page(
                &self,
                _: &PropertyFilter,
                _: u64,
                _: u64,
            ) -> Result<Vec<Property>, Self::Error> {
                Err(MustNotFetch)
            }
            fn clients_page(&self, _: u64, _: u64) -> Result<Vec<Client>, Self::Error> {
                Err(MustNotFetch)
            }
        }

        let engine = ReportEngine::new(FailingStore);
        let err = engine
            .period_summary(date(2026, 2, 1), date(2026, 1, 1))
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidDateRange { .. }));

        let err = engine
            .property_profitability(
                date(2026, 1, 1),
                date(2026, 1, 1),
                None,
                ProfitabilityRanking::Margin,
            )
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidDateRange { .. }));

        // A valid window does reach the store and surfaces its failure.
        let err = engine
            .period_summary(date(2026, 1, 1), date(2026, 2, 1))
            .unwrap_err();
        assert!(matches!(err, ReportError::Generation(_)));
    }

    #[test]
    fn test_profitability_covers_all_properties() {
        let engine = ReportEngine::new(seeded_store());
        let entries = engine
            .property_profitability(
                date(2026, 1, 1),
                date(2026, 2, 1),
                None,
                ProfitabilityRanking::Revenue,
            )
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].revenue, dec!(2400.00));
        assert_eq!(entries[0].expenses, dec!(400.00));
        assert_eq!(entries[0].profit, dec!(2000.00));
        assert_eq!(entries[1].revenue, dec!(2200.00));
    }

    #[test]
    fn test_profitability_single_property_filter() {
        let store = seeded_store();
        let all = ReportEngine::new(store.clone())
            .property_profitability(
                date(2026, 1, 1),
                date(2026, 2, 1),
                None,
                ProfitabilityRanking::Revenue,
            )
            .unwrap();
        let target = all[1].property_id;

        let entries = ReportEngine::new(store)
            .property_profitability(
                date(2026, 1, 1),
                date(2026, 2, 1),
                Some(target),
                ProfitabilityRanking::Revenue,
            )
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].property_id, target);
        assert_eq!(entries[0].revenue, all[1].revenue);
    }

    #[test]
    fn test_delinquency_report_end_to_end() {
        let engine = ReportEngine::new(seeded_store());
        let report = engine
            .delinquency(DelinquencyQuery {
                evaluation_date: Some(date(2026, 2, 1)),
                minimum_days_late: 1,
                sort: DelinquencySort::DaysLate,
            })
            .unwrap();

        assert_eq!(report.entries.len(), 1);
        let entry = &report.entries[0];
        // Oldest payment due 2025-12-05 is 58 days late on 2026-02-01.
        assert_eq!(entry.days_late, 58);
        assert_eq!(entry.overdue_payments, 2);
        // Each overdue payment owes 1000 + 3 + 20.
        assert_eq!(entry.amount_owed, dec!(2046.00));
        assert_eq!(entry.tenant_name.as_deref(), Some("Álvaro Pinto"));
        assert!(entry.property_id.is_some());

        assert_eq!(report.aging.days_31_to_60.contracts, 1);
        assert_eq!(report.aging.days_31_to_60.amount_owed, dec!(2046.00));
        assert_eq!(report.total_owed, dec!(2046.00));
    }

    #[test]
    fn test_delinquency_ignores_payments_due_after_evaluation() {
        let engine = ReportEngine::new(seeded_store());
        // Evaluated between the two due dates: only the December payment counts.
        let report = engine
            .delinquency(DelinquencyQuery {
                evaluation_date: Some(date(2025, 12, 31)),
                minimum_days_late: 1,
                sort: DelinquencySort::DaysLate,
            })
            .unwrap();

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].overdue_payments, 1);
        assert_eq!(report.entries[0].days_late, 26);
    }

    fn config() -> FinancialConfiguration {
        FinancialConfiguration {
            id: ConfigurationId::new(),
            monthly_interest_rate: dec!(0.01),
            penalty_rate: dec!(0.02),
            grace_days: 5,
        }
    }

    #[test]
    fn test_late_fee_recommendations_for_overdue_payments() {
        let engine = ReportEngine::new(seeded_store());
        let recommendations = engine
            .late_fee_recommendations(Some(date(2026, 2, 1)), Some(&config()))
            .unwrap();

        assert_eq!(recommendations.len(), 2);
        // Store order is by payment id (v7, creation-ordered), so the
        // December payment comes first: 58 days late, 53 past grace.
        let december = &recommendations[0];
        assert_eq!(december.days_late, 58);
        assert_eq!(december.breakdown.interest, dec!(17.67));
        assert_eq!(december.breakdown.penalty, dec!(20.00));
        assert_eq!(december.breakdown.total, dec!(1037.67));

        // January payment: 27 days late, 22 past grace.
        let january = &recommendations[1];
        assert_eq!(january.days_late, 27);
        assert_eq!(january.breakdown.interest, dec!(7.33));
        assert_eq!(january.breakdown.total, dec!(1027.33));
    }

    #[test]
    fn test_late_fee_recommendations_require_configuration() {
        let engine = ReportEngine::new(seeded_store());
        let err = engine
            .late_fee_recommendations(Some(date(2026, 2, 1)), None)
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::Fee(FeeError::MissingConfiguration)
        ));
    }

    #[test]
    fn test_reports_serialize_to_json() {
        let engine = ReportEngine::new(seeded_store());
        let summary = engine
            .period_summary(date(2026, 1, 1), date(2026, 2, 1))
            .unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["revenue"], serde_json::json!("4600.00"));

        let report = engine
            .delinquency(DelinquencyQuery::default())
            .unwrap();
        assert!(serde_json::to_string(&report).is_ok());
    }
}
