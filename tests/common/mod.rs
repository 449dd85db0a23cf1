#![allow(dead_code)]

use chrono::NaiveDate;
use cotmonitor::domain::dataset::{Dataset, Observation};
use cotmonitor::domain::error::CotError;
use cotmonitor::domain::highlight::HighlightStyle;
use cotmonitor::domain::instruments::InstrumentMapping;
use cotmonitor::ports::data_port::{DataPort, ReportQuery};
use cotmonitor::ports::instrument_port::InstrumentStore;
use cotmonitor::ports::render_port::RenderTarget;
use std::cell::RefCell;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Dataset>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn with_report(mut self, contract_code: &str, data: Dataset) -> Self {
        self.data.insert(contract_code.to_string(), data);
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_report(&self, query: &ReportQuery) -> Result<Dataset, CotError> {
        self.data
            .get(&query.contract_code)
            .cloned()
            .ok_or_else(|| CotError::NoData {
                dataset_code: query.dataset_code.clone(),
                contract_code: query.contract_code.clone(),
                type_category: query.type_category.clone(),
            })
    }
}

#[derive(Default)]
pub struct MemoryInstrumentStore {
    pub mapping: RefCell<InstrumentMapping>,
    pub saves: RefCell<usize>,
}

impl MemoryInstrumentStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let mut mapping = InstrumentMapping::new();
        for (name, code) in entries {
            mapping.add(name, code).unwrap();
        }
        Self {
            mapping: RefCell::new(mapping),
            saves: RefCell::new(0),
        }
    }
}

impl InstrumentStore for MemoryInstrumentStore {
    fn load(&self) -> Result<InstrumentMapping, CotError> {
        Ok(self.mapping.borrow().clone())
    }

    fn save(&self, mapping: &InstrumentMapping) -> Result<(), CotError> {
        *self.mapping.borrow_mut() = mapping.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingTarget {
    pub shaded: Vec<(NaiveDate, NaiveDate)>,
    pub styles: Vec<HighlightStyle>,
}

impl RenderTarget for RecordingTarget {
    fn shade_x_range(&mut self, start: NaiveDate, end: NaiveDate, style: &HighlightStyle) {
        self.shaded.push((start, end));
        self.styles.push(style.clone());
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Weekly Tuesday reports from `start` for `weeks` weeks.
pub fn weekly_reports(start: &str, weeks: usize) -> Dataset {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    (0..weeks)
        .map(|i| {
            Observation::new(start + chrono::Duration::weeks(i as i64))
                .with_field("market_participation", 500_000.0 + i as f64 * 100.0)
                .with_field("money_manager_longs", 80_000.0 + i as f64)
                .with_field("money_manager_shorts", 40_000.0 - i as f64)
        })
        .collect()
}

/// One observation per calendar day in `[start, end]`.
pub fn daily(start: NaiveDate, end: NaiveDate) -> Dataset {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(Observation::new)
        .collect()
}
