//! # Error Taxonomy
//!
//! * [`RecordError`]: a registry operation was refused. Nothing was mutated.
//! * [`StoreError`]: the persistent store failed. Propagated as-is, never retried.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The kind of record a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Patient,
    Doctor,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Patient => f.write_str("patient"),
            RecordKind::Doctor => f.write_str("doctor"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("{kind} '{id}' not found")]
    ReferenceNotFound { kind: RecordKind, id: String },

    #[error("specialty '{0}' is too short to derive a doctor id (need at least 2 characters)")]
    SpecialtyTooShort(String),

    #[error("appointment date out of range: today + {0} days")]
    DateOutOfRange(u32),

    #[error("invalid gender '{0}', expected 'male' or 'female'")]
    InvalidGender(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open record store at {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("failed to prepare record store schema")]
    Schema(#[source] BoxError),

    #[error("failed to write {table} row '{id}'")]
    Write {
        table: &'static str,
        id: String,
        #[source]
        source: BoxError,
    },

    #[error("export transaction failed")]
    Transaction(#[source] BoxError),

    #[error("failed to query record store")]
    Query(#[source] BoxError),
}

impl StoreError {
    pub fn open<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        StoreError::Open {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn write<E>(table: &'static str, id: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        StoreError::Write {
            table,
            id: id.to_string(),
            source: source.into(),
        }
    }
}
