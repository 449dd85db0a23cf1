//! Highlight period source port.

use crate::domain::error::CotError;
use crate::domain::period::RawPeriod;

/// Supplies raw period entries in a stable order. Shape checking is left to
/// [`crate::domain::period::parse_periods`].
pub trait PeriodSource {
    fn raw_periods(&self) -> Result<Vec<RawPeriod>, CotError>;
}
