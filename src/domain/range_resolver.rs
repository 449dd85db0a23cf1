//! Resolution of highlight periods into concrete date intervals.
//!
//! Every period is applied to each calendar year present in the dataset. A
//! candidate interval is kept only when both endpoints exist in that year,
//! `start <= end`, and both endpoints lie inside the dataset's coverage.
//! Anything else contributes nothing; resolution itself never fails.

use crate::domain::dataset::Dataset;
use crate::domain::period::PeriodSpec;
use chrono::NaiveDate;
use std::fmt;

/// A concrete `[start, end]` interval inside a dataset's coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ResolvedInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive length in calendar days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for ResolvedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}

/// Resolve `periods` against `dataset`.
///
/// Output is grouped by period in input order, then by ascending year.
pub fn resolve(dataset: &Dataset, periods: &[PeriodSpec]) -> Vec<ResolvedInterval> {
    let mut resolved = Vec::new();
    if periods.is_empty() {
        return resolved;
    }
    let Some((min_date, max_date)) = dataset.coverage() else {
        return resolved;
    };
    let years = dataset.years();

    for period in periods {
        let (start_md, end_md) = period.month_days();
        for &year in &years {
            let (Some(start), Some(end)) = (start_md.in_year(year), end_md.in_year(year)) else {
                log::debug!("{period}: no such date in {year}");
                continue;
            };
            if start > end {
                continue;
            }
            if start < min_date || end > max_date {
                log::debug!("{period}: {start}..{end} outside {min_date}..{max_date}");
                continue;
            }
            resolved.push(ResolvedInterval { start, end });
        }
    }

    resolved
}
