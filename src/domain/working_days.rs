//! Seasonal windows built from the first working-day observations of a month.

use crate::domain::dataset::Dataset;
use crate::domain::range_resolver::ResolvedInterval;
use chrono::{Datelike, NaiveDate, Weekday};

/// `(month, working days)` windows highlighted by default: early February,
/// early September and early December.
pub const DEFAULT_SEASONAL_WINDOWS: [(u32, usize); 3] = [(2, 10), (9, 11), (12, 12)];

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// For each year in `dataset`, the span of the first `count` weekday
/// observations falling in `month`. Years with no such observation are skipped.
pub fn leading_weekday_ranges(
    dataset: &Dataset,
    month: u32,
    count: usize,
) -> Vec<ResolvedInterval> {
    if count == 0 {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    for year in dataset.years() {
        let mut dates: Vec<NaiveDate> = dataset
            .rows
            .iter()
            .map(|r| r.date)
            .filter(|d| d.year() == year && d.month() == month && is_weekday(*d))
            .collect();
        dates.sort();
        dates.truncate(count);

        if let (Some(&start), Some(&end)) = (dates.first(), dates.last()) {
            ranges.push(ResolvedInterval { start, end });
        }
    }
    ranges
}

/// [`leading_weekday_ranges`] for every window in `windows`, in window order.
pub fn seasonal_ranges(dataset: &Dataset, windows: &[(u32, usize)]) -> Vec<ResolvedInterval> {
    windows
        .iter()
        .flat_map(|&(month, count)| leading_weekday_ranges(dataset, month, count))
        .collect()
}
