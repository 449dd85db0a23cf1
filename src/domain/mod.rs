//! Core domain types and logic.

pub mod chart;
pub mod config_validation;
pub mod dataset;
pub mod error;
pub mod highlight;
pub mod instruments;
pub mod period;
pub mod range_resolver;
pub mod report_type;
pub mod working_days;
