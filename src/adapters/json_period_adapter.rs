//! JSON file of highlight periods.
//!
//! The file is an array of objects using the same keys as the INI
//! `highlight.*` sections. Values may be numbers or strings.

use crate::domain::error::CotError;
use crate::domain::period::RawPeriod;
use crate::ports::period_port::PeriodSource;
use std::fs;
use std::path::PathBuf;

pub struct JsonPeriodAdapter {
    path: PathBuf,
}

impl JsonPeriodAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn error(&self, reason: String) -> CotError {
        CotError::PeriodFile {
            file: self.path.display().to_string(),
            reason,
        }
    }
}

impl PeriodSource for JsonPeriodAdapter {
    fn raw_periods(&self) -> Result<Vec<RawPeriod>, CotError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| self.error(e.to_string()))
    }
}
