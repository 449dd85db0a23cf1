//! Port traits: the boundaries the domain depends on.

pub mod config_port;
pub mod data_port;
pub mod instrument_port;
pub mod period_port;
pub mod render_port;
