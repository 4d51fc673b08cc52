use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use carebook_common::error::RecordError;

/// Hands out doctor ids of the form `PREFIX` + sequence number.
///
/// The prefix is the first two characters of the specialty, uppercased, so
/// "Cardiology" and "cardiac surgery" draw from the same `CA` sequence.
/// Numbers are zero-padded to two digits and simply grow wider past 99
/// (`CA99`, `CA100`). Counters are never reset for the life of the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorIdGenerator {
    counters: BTreeMap<String, u32>,
}

impl DoctorIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next id for `specialty`.
    ///
    /// Fails without touching any counter if the specialty has fewer than
    /// two characters.
    pub fn next_id(&mut self, specialty: &str) -> Result<String, RecordError> {
        let prefix: String = prefix(specialty)?;
        let count: &mut u32 = self.counters.entry(prefix.clone()).or_insert(0);
        *count += 1;

        Ok(format!("{prefix}{:02}", *count))
    }
}

fn prefix(specialty: &str) -> Result<String, RecordError> {
    let mut chars = specialty.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => Ok(first.to_uppercase().chain(second.to_uppercase()).collect()),
        _ => Err(RecordError::SpecialtyTooShort(specialty.to_string())),
    }
}
