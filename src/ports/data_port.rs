//! Data access port trait.

use crate::domain::dataset::Dataset;
use crate::domain::error::CotError;
use chrono::NaiveDate;

/// Selects one positioning report series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub dataset_code: String,
    pub contract_code: String,
    pub type_category: String,
}

pub trait DataPort {
    fn fetch_report(&self, query: &ReportQuery) -> Result<Dataset, CotError>;

    /// `(min_date, max_date, rows)` of a report, or `None` if it has no rows.
    fn get_data_range(
        &self,
        query: &ReportQuery,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, CotError> {
        let data = self.fetch_report(query)?;
        Ok(data.coverage().map(|(min, max)| (min, max, data.len())))
    }
}
