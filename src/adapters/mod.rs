//! Concrete adapter implementations for ports.

pub mod csv_adapter;
pub mod file_config_adapter;
pub mod json_instrument_adapter;
pub mod json_period_adapter;
pub mod svg_chart;
