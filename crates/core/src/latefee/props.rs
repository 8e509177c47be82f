//! Property-based tests for the late-fee calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::LateFeeService;

/// Strategy to generate positive amounts due (0.01 to 1,000,000.00).
fn amount_due() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-negative rates (0.0000 to 1.0000).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Inside the grace window no fee accrues: interest and penalty are zero
    /// and the total is exactly the amount due.
    #[test]
    fn prop_no_fee_within_grace(
        amount in amount_due(),
        monthly_rate in rate(),
        penalty_rate in rate(),
        grace_days in 0i64..90,
        days_late in 0i64..90,
    ) {
        prop_assume!(days_late <= grace_days);

        let fee = LateFeeService::compute(
            amount, days_late, monthly_rate, penalty_rate, grace_days,
        ).unwrap();

        prop_assert_eq!(fee.interest, Decimal::ZERO);
        prop_assert_eq!(fee.penalty, Decimal::ZERO);
        prop_assert_eq!(fee.total, amount);
    }

    /// Interest is monotonically non-decreasing in days late, holding every
    /// other input fixed.
    #[test]
    fn prop_interest_monotone_in_days_late(
        amount in amount_due(),
        monthly_rate in rate(),
        penalty_rate in rate(),
        grace_days in 0i64..30,
        days_late in 0i64..365,
        extra_days in 0i64..90,
    ) {
        let fee_a = LateFeeService::compute(
            amount, days_late, monthly_rate, penalty_rate, grace_days,
        ).unwrap();
        let fee_b = LateFeeService::compute(
            amount, days_late + extra_days, monthly_rate, penalty_rate, grace_days,
        ).unwrap();

        prop_assert!(
            fee_b.interest >= fee_a.interest,
            "interest decreased from {} to {} when days late grew",
            fee_a.interest, fee_b.interest
        );
    }

    /// The calculator is deterministic: identical inputs yield identical
    /// outputs.
    #[test]
    fn prop_compute_is_deterministic(
        amount in amount_due(),
        monthly_rate in rate(),
        penalty_rate in rate(),
        grace_days in 0i64..30,
        days_late in 0i64..365,
    ) {
        let a = LateFeeService::compute(
            amount, days_late, monthly_rate, penalty_rate, grace_days,
        ).unwrap();
        let b = LateFeeService::compute(
            amount, days_late, monthly_rate, penalty_rate, grace_days,
        ).unwrap();

        prop_assert_eq!(a, b);
    }

    /// The penalty never depends on how many days late the payment is, only
    /// on whether the grace window was exceeded.
    #[test]
    fn prop_penalty_is_flat_past_grace(
        amount in amount_due(),
        monthly_rate in rate(),
        penalty_rate in rate(),
        grace_days in 0i64..30,
        days_a in 1i64..365,
        days_b in 1i64..365,
    ) {
        let fee_a = LateFeeService::compute(
            amount, grace_days + days_a, monthly_rate, penalty_rate, grace_days,
        ).unwrap();
        let fee_b = LateFeeService::compute(
            amount, grace_days + days_b, monthly_rate, penalty_rate, grace_days,
        ).unwrap();

        prop_assert_eq!(fee_a.penalty, fee_b.penalty);
    }

    /// Totals decompose exactly: total = amount due + interest + penalty.
    #[test]
    fn prop_total_decomposes(
        amount in amount_due(),
        monthly_rate in rate(),
        penalty_rate in rate(),
        grace_days in 0i64..30,
        days_late in 0i64..365,
    ) {
        let fee = LateFeeService::compute(
            amount, days_late, monthly_rate, penalty_rate, grace_days,
        ).unwrap();

        prop_assert_eq!(fee.total, amount + fee.interest + fee.penalty);
    }
}
