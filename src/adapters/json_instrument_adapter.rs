//! Instrument mapping persisted as a JSON object of `name: code` pairs.
//!
//! Files are written with four-space indentation and no trailing newline, in
//! mapping order, so a load/save cycle leaves a hand-written file unchanged.

use crate::domain::error::CotError;
use crate::domain::instruments::InstrumentMapping;
use crate::ports::instrument_port::InstrumentStore;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::PathBuf;

pub struct JsonInstrumentAdapter {
    path: PathBuf,
}

impl JsonInstrumentAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl InstrumentStore for JsonInstrumentAdapter {
    fn load(&self) -> Result<InstrumentMapping, CotError> {
        let content = fs::read_to_string(&self.path).map_err(|e| CotError::InstrumentStore {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        serde_json::from_str(&content).map_err(|e| CotError::InstrumentStore {
            reason: format!("error decoding {}: {}", self.path.display(), e),
        })
    }

    fn save(&self, mapping: &InstrumentMapping) -> Result<(), CotError> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        mapping
            .serialize(&mut ser)
            .map_err(|e| CotError::InstrumentStore {
                reason: format!("failed to encode instruments: {}", e),
            })?;
        fs::write(&self.path, buf).map_err(|e| CotError::InstrumentStore {
            reason: format!("error saving {}: {}", self.path.display(), e),
        })
    }
}
