//! Instrument mapping persistence port.

use crate::domain::error::CotError;
use crate::domain::instruments::InstrumentMapping;

pub trait InstrumentStore {
    fn load(&self) -> Result<InstrumentMapping, CotError>;
    fn save(&self, mapping: &InstrumentMapping) -> Result<(), CotError>;
}
