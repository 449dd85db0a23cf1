//! INI file configuration adapter.
//!
//! Also serves as a [`PeriodSource`]: every section named `highlight.<label>`
//! is one raw period entry, read in section-name order.

use crate::domain::error::CotError;
use crate::domain::period::RawPeriod;
use crate::ports::config_port::ConfigPort;
use crate::ports::period_port::PeriodSource;
use configparser::ini::Ini;
use std::path::Path;

pub const HIGHLIGHT_SECTION_PREFIX: &str = "highlight.";

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn sections(&self) -> Vec<String> {
        let mut sections = self.config.sections();
        sections.sort();
        sections
    }

    fn entries(&self, section: &str) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .config
            .get_map_ref()
            .get(&section.to_lowercase())
            .map(|keys| {
                keys.iter()
                    .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort();
        entries
    }
}

impl PeriodSource for FileConfigAdapter {
    fn raw_periods(&self) -> Result<Vec<RawPeriod>, CotError> {
        Ok(self
            .sections()
            .into_iter()
            .filter(|s| s.starts_with(HIGHLIGHT_SECTION_PREFIX))
            .map(|section| {
                let mut raw = RawPeriod::new();
                for (key, value) in self.entries(&section) {
                    raw.insert(&key, value);
                }
                raw
            })
            .collect())
    }
}
