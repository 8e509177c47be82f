//! Group-by, percentage and ranking primitives shared by all reports.
//!
//! Every reporter is a fold over record pages; these helpers are the only
//! aggregation machinery they use, so the three report paths cannot drift
//! apart in how they sum, rank or divide.

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use rentfolio_shared::round2;

/// Incremental group-by-sum accumulator.
///
/// Keys are kept in first-seen order, which downstream ranking relies on for
/// stable tiebreaks. Adding is commutative per key, so folding records in any
/// page order produces the same sums.
#[derive(Debug, Clone, Default)]
pub struct GroupedSums<K> {
    order: Vec<K>,
    sums: HashMap<K, Decimal>,
}

impl<K: Eq + Hash + Clone> GroupedSums<K> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            sums: HashMap::new(),
        }
    }

    /// Adds `value` to the sum for `key`, registering the key on first sight.
    pub fn add(&mut self, key: K, value: Decimal) {
        if !self.sums.contains_key(&key) {
            self.order.push(key.clone());
        }
        *self.sums.entry(key).or_insert(Decimal::ZERO) += value;
    }

    /// Sum for a key, if it has been seen.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<Decimal> {
        self.sums.get(key).copied()
    }

    /// Number of distinct keys seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no key has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the accumulator into `(key, sum)` pairs in first-seen order.
    #[must_use]
    pub fn into_pairs(mut self) -> Vec<(K, Decimal)> {
        self.order
            .into_iter()
            .map(|key| {
                let sum = self.sums.remove(&key).unwrap_or(Decimal::ZERO);
                (key, sum)
            })
            .collect()
    }
}

/// Sums `value_fn(r)` for each record sharing `key_fn(r)`.
///
/// Keys preserve first-seen order.
pub fn group_sum<R, K, KF, VF>(records: impl IntoIterator<Item = R>, key_fn: KF, value_fn: VF) -> Vec<(K, Decimal)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&R) -> K,
    VF: Fn(&R) -> Decimal,
{
    let mut groups = GroupedSums::new();
    for record in records {
        groups.add(key_fn(&record), value_fn(&record));
    }
    groups.into_pairs()
}

/// Returns `part` as a percentage of `whole`, rounded to 2 decimal places.
///
/// A zero `whole` yields zero; this never divides by zero and never errors.
#[must_use]
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        round2(Decimal::ONE_HUNDRED * part / whole)
    }
}

/// Sorts `items` descending by `metric_fn`.
///
/// The sort is stable: ties keep the original input order rather than being
/// re-ordered arbitrarily.
pub fn rank_descending<T, F>(items: &mut [T], metric_fn: F)
where
    F: Fn(&T) -> Decimal,
{
    items.sort_by(|a, b| metric_fn(b).cmp(&metric_fn(a)));
}

/// Builds a collation key for locale-aware name ordering.
///
/// Decomposes to NFD, strips combining marks and case-folds, so "Álvaro"
/// orders next to "Alvaro" instead of after "Zoe" the way a byte compare
/// would put it.
#[must_use]
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
