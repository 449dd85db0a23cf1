//! Positioning report observations and the dataset that holds them.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// One report row: a calendar date plus named numeric fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub fields: BTreeMap<String, f64>,
}

impl Observation {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: f64) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }
}

/// Ordered sequence of observations. May be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Observation>,
}

impl Dataset {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.rows.iter().map(|r| r.date).min()
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.rows.iter().map(|r| r.date).max()
    }

    /// Inclusive `[min_date, max_date]`, or `None` for an empty dataset.
    pub fn coverage(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.min_date()?, self.max_date()?))
    }

    /// Distinct calendar years, ascending.
    pub fn years(&self) -> BTreeSet<i32> {
        self.rows.iter().map(|r| r.date.year()).collect()
    }

    /// Union of field names across all rows.
    pub fn field_names(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .flat_map(|r| r.fields.keys().cloned())
            .collect()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.fields.contains_key(name))
    }

    /// `(date, value)` points for one field, skipping rows without it.
    pub fn series(&self, name: &str) -> Vec<(NaiveDate, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.get(name).map(|v| (r.date, v)))
            .collect()
    }

    /// Rows with `start <= date <= end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Dataset {
        Dataset {
            rows: self
                .rows
                .iter()
                .filter(|r| r.date >= start && r.date <= end)
                .cloned()
                .collect(),
        }
    }

    pub fn sort_by_date(&mut self) {
        self.rows.sort_by_key(|r| r.date);
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
