//! CSV file data adapter.
//!
//! Reports live in `<base>/<DATASET>_<CONTRACT>_<TYPE>.csv`, with the `/` of
//! the dataset code replaced by `_`. The header names every column; the one
//! called `date` is required, every other column is read as a numeric field.

use crate::domain::dataset::{Dataset, Observation};
use crate::domain::error::CotError;
use crate::domain::period::DATE_FORMAT;
use crate::ports::data_port::{DataPort, ReportQuery};
use chrono::NaiveDate;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn csv_path(&self, query: &ReportQuery) -> PathBuf {
        self.base_path.join(format!(
            "{}_{}_{}.csv",
            query.dataset_code.replace('/', "_"),
            query.contract_code,
            query.type_category
        ))
    }

    /// Read one CSV file into a date-sorted dataset.
    pub fn read_file(path: &Path) -> Result<Dataset, CotError> {
        let file = fs::File::open(path).map_err(|e| CotError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::read_from(file)
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Dataset, CotError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr
            .headers()
            .map_err(|e| CotError::Data {
                reason: format!("CSV header error: {}", e),
            })?
            .clone();

        let date_idx = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("date"))
            .ok_or_else(|| CotError::Data {
                reason: "missing date column".into(),
            })?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| CotError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(date_idx).unwrap_or_default().trim();
            let date = parse_date(date_str)?;

            let mut obs = Observation::new(date);
            for (idx, header) in headers.iter().enumerate() {
                if idx == date_idx {
                    continue;
                }
                if let Some(value) = record.get(idx).and_then(|v| v.trim().parse::<f64>().ok()) {
                    obs.fields.insert(header.trim().to_string(), value);
                }
            }
            rows.push(obs);
        }

        let mut dataset = Dataset::new(rows);
        dataset.sort_by_date();
        Ok(dataset)
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part.
fn parse_date(value: &str) -> Result<NaiveDate, CotError> {
    let day_part = value.split(['T', ' ']).next().unwrap_or_default();
    NaiveDate::parse_from_str(day_part, DATE_FORMAT).map_err(|e| CotError::Data {
        reason: format!("invalid date '{}': {}", value, e),
    })
}

impl DataPort for CsvAdapter {
    fn fetch_report(&self, query: &ReportQuery) -> Result<Dataset, CotError> {
        let path = self.csv_path(query);
        if !path.exists() {
            return Err(CotError::NoData {
                dataset_code: query.dataset_code.clone(),
                contract_code: query.contract_code.clone(),
                type_category: query.type_category.clone(),
            });
        }
        Self::read_file(&path)
    }
}
