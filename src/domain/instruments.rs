//! User-maintained mapping from instrument names to contract codes.
//!
//! Entries keep the order they were read or added in; the first entry is the
//! default instrument when none is configured.

use crate::domain::error::CotError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentMapping {
    entries: Vec<(String, String)>,
}

impl InstrumentMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }

    /// The default instrument: the first entry.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(n, c)| (n.as_str(), c.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    /// Replace the code of an existing name in place, or append a new entry.
    fn upsert(&mut self, name: String, code: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = code,
            None => self.entries.push((name, code)),
        }
    }

    /// Add or replace an instrument. Both fields must be non-blank.
    pub fn add(&mut self, name: &str, code: &str) -> Result<(), CotError> {
        let name = name.trim();
        let code = code.trim();
        if name.is_empty() || code.is_empty() {
            return Err(CotError::InstrumentInvalid {
                reason: "both a product name and a code are required".into(),
            });
        }
        self.upsert(name.to_string(), code.to_string());
        Ok(())
    }

    /// Remove an instrument, refusing to drop the one currently selected.
    pub fn remove(&mut self, name: &str, selected: Option<&str>) -> Result<String, CotError> {
        if selected == Some(name) {
            return Err(CotError::InstrumentInvalid {
                reason: format!("cannot remove the currently selected instrument {}", name),
            });
        }
        let index = self
            .entries
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| CotError::UnknownInstrument(name.to_string()))?;
        Ok(self.entries.remove(index).1)
    }
}

impl Serialize for InstrumentMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct MappingVisitor;

impl<'de> Visitor<'de> for MappingVisitor {
    type Value = InstrumentMapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of instrument names to contract codes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = InstrumentMapping::new();
        while let Some((name, code)) = access.next_entry::<String, String>()? {
            mapping.upsert(name, code);
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for InstrumentMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MappingVisitor)
    }
}
