//! Report windows and calendar arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::reports::ReportError;

/// Whole calendar days from `a` to `b`; negative when `b` is before `a`.
#[must_use]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// A half-open report window `[start, end)`.
///
/// Construction rejects empty or inverted windows, so every report holding a
/// `PeriodWindow` is known to cover at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl PeriodWindow {
    /// Creates a window over `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDateRange`] when `end <= start`. This is
    /// checked before any record is fetched.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if end <= start {
            return Err(ReportError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window start (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Window end (exclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the date falls within `[start, end)`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of days covered by the window.
    #[must_use]
    pub fn days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Number of distinct calendar months the window intersects.
    ///
    /// Used as the occupancy denominator: a window from Jan 15 to Mar 15
    /// touches January, February and March, so it spans 3 months.
    #[must_use]
    pub fn months_spanned(&self) -> i64 {
        // end is exclusive; the last covered day is end - 1.
        let last = self.end.pred_opt().unwrap_or(self.start);
        let first_index = i64::from(self.start.year()) * 12 + i64::from(self.start.month0());
        let last_index = i64::from(last.year()) * 12 + i64::from(last.month0());
        last_index - first_index + 1
    }
}
