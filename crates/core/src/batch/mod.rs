//! Bounded-memory pagination driver.
//!
//! Reports may run over tens of thousands of payment rows; every reporter
//! therefore consumes records through [`fold_pages`], which holds at most one
//! page plus the accumulator at any time. The three report paths share this
//! single fetch-then-reduce loop instead of each carrying its own.

use thiserror::Error;

/// Default number of records fetched per page.
pub const DEFAULT_PAGE_SIZE: u64 = 1000;

/// Errors raised by the pagination driver.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The record source failed while fetching a page.
    ///
    /// The original cause is attached. The driver never retries; retry
    /// policy belongs to the record-store collaborator.
    #[error("record source failed while fetching a page")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Folds every record behind `fetch` into `acc`, one page at a time.
///
/// `fetch(offset, limit)` is called with a fixed `page_size` until it returns
/// a page shorter than requested; each page is folded record by record and
/// dropped before the next fetch, keeping peak memory at O(page +
/// accumulator) rather than O(dataset).
///
/// Folds must be commutative and associative (sums, sets, groupings) so the
/// final aggregate is identical for any page size.
///
/// # Errors
///
/// A fetch failure aborts the fold and surfaces as [`BatchError::Fetch`]; no
/// partial accumulator is returned.
pub fn fold_pages<R, A, E, FetchFn, FoldFn>(
    mut fetch: FetchFn,
    page_size: u64,
    mut acc: A,
    mut fold: FoldFn,
) -> Result<A, BatchError>
where
    E: std::error::Error + Send + Sync + 'static,
    FetchFn: FnMut(u64, u64) -> Result<Vec<R>, E>,
    FoldFn: FnMut(&mut A, R),
{
    let page_size = page_size.max(1);
    let mut offset = 0u64;
    loop {
        let page = fetch(offset, page_size).map_err(|e| BatchError::Fetch(Box::new(e)))?;
        let fetched = page.len() as u64;
        tracing::trace!(offset, fetched, "folded page");

        for record in page {
            fold(&mut acc, record);
        }

        if fetched < page_size {
            return Ok(acc);
        }
        offset += fetched;
    }
}
