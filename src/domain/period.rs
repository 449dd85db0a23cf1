//! Highlight period definitions.
//!
//! Raw period entries come from INI sections or JSON files as loose
//! key/value maps. [`PeriodSpec::from_raw`] decides the shape once; entries
//! that match neither shape never become a `PeriodSpec`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A month/day pair with `month` in 1..=12 and `day` in 1..=31.
///
/// The pair is not checked against any particular year; Apr 31 is a valid
/// `MonthDay` that never lands on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some(Self { month, day })
        } else {
            None
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The date this pattern falls on in `year`, if that day exists.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// A highlight period, either a legacy explicit range or a recurring pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSpec {
    ExplicitRange { start: NaiveDate, end: NaiveDate },
    RecurringRange { start: MonthDay, end: MonthDay },
}

impl PeriodSpec {
    pub fn explicit(start: NaiveDate, end: NaiveDate) -> Self {
        PeriodSpec::ExplicitRange { start, end }
    }

    pub fn recurring(
        start_month: u32,
        start_day: u32,
        end_month: u32,
        end_day: u32,
    ) -> Option<Self> {
        Some(PeriodSpec::RecurringRange {
            start: MonthDay::new(start_month, start_day)?,
            end: MonthDay::new(end_month, end_day)?,
        })
    }

    /// The annual pattern this period applies. Explicit ranges drop their years.
    pub fn month_days(&self) -> (MonthDay, MonthDay) {
        match *self {
            PeriodSpec::ExplicitRange { start, end } => (MonthDay::of(start), MonthDay::of(end)),
            PeriodSpec::RecurringRange { start, end } => (start, end),
        }
    }

    /// Shape-match a raw entry. `start`/`end` take precedence over the
    /// recurring keys when both are present.
    pub fn from_raw(raw: &RawPeriod) -> Option<Self> {
        if raw.contains("start") && raw.contains("end") {
            let start = raw.date("start")?;
            let end = raw.date("end")?;
            return Some(PeriodSpec::explicit(start, end));
        }
        PeriodSpec::recurring(
            raw.number("start_month")?,
            raw.number("start_day")?,
            raw.number("end_month")?,
            raw.number("end_day")?,
        )
    }
}

impl fmt::Display for PeriodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodSpec::ExplicitRange { start, end } => write!(f, "{}..{}", start, end),
            PeriodSpec::RecurringRange { start, end } => write!(f, "every {}..{}", start, end),
        }
    }
}

/// An unvalidated period entry: string keys mapped to JSON-like values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPeriod(BTreeMap<String, Value>);

impl RawPeriod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    fn number(&self, key: &str) -> Option<u32> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn date(&self, key: &str) -> Option<NaiveDate> {
        match self.0.get(key)? {
            Value::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
            _ => None,
        }
    }
}

/// Convert raw entries to specs, dropping malformed ones. Order is kept.
pub fn parse_periods(raw: &[RawPeriod]) -> Vec<PeriodSpec> {
    raw.iter()
        .filter_map(|entry| {
            let spec = PeriodSpec::from_raw(entry);
            if spec.is_none() {
                log::debug!("skipping malformed highlight period: {:?}", entry);
            }
            spec
        })
        .collect()
}
