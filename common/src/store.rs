//! # Record Store Port
//!
//! Contract for pushing registry contents into a persistent relational store.
//!
//! Three tables are expected, keyed by record id:
//! * `Doctors(person_id, name, specialty)`
//! * `Patients(person_id, name, age)`
//! * `Appointments(appointment_id, patient_id, doctor_id, date)`
//!
//! Implementations live in `carebook-core`.

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;
use crate::records::appointment::Appointment;
use crate::records::doctor::Doctor;
use crate::records::patient::Patient;

/// What an export does with a row whose key already exists in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportPolicy {
    /// Insert only missing keys. Existing rows are left as they are, even if
    /// the in-memory record changed since the last export.
    #[default]
    InsertIfAbsent,
    /// Insert missing keys and update existing rows from memory.
    Overwrite,
}

impl FromStr for ExportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insert-if-absent" | "insert" => Ok(ExportPolicy::InsertIfAbsent),
            "overwrite" => Ok(ExportPolicy::Overwrite),
            _ => Err(format!(
                "invalid export policy: {s} (expected 'insert-if-absent' or 'overwrite')"
            )),
        }
    }
}

impl fmt::Display for ExportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportPolicy::InsertIfAbsent => f.write_str("insert-if-absent"),
            ExportPolicy::Overwrite => f.write_str("overwrite"),
        }
    }
}

/// Everything one export writes, borrowed straight from the registry.
#[derive(Debug, Clone, Copy)]
pub struct ExportBatch<'a> {
    pub doctors: &'a [Doctor],
    pub patients: &'a [Patient],
    pub appointments: &'a [Appointment],
}

/// Outcome of one table within an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableReport {
    /// Rows inserted or, under [`ExportPolicy::Overwrite`], updated.
    pub written: usize,
    /// Rows left untouched because their key was already present.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub doctors: TableReport,
    pub patients: TableReport,
    pub appointments: TableReport,
}

impl ExportReport {
    pub fn written(&self) -> usize {
        self.doctors.written + self.patients.written + self.appointments.written
    }

    pub fn skipped(&self) -> usize {
        self.doctors.skipped + self.patients.skipped + self.appointments.skipped
    }
}

/// Row (or record) counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub doctors: usize,
    pub patients: usize,
    pub appointments: usize,
}

pub trait RecordStore {
    /// Writes the whole batch as one unit: doctors, then patients, then
    /// appointments, committed once.
    ///
    /// On error nothing from the batch is applied and the error is returned
    /// without retrying.
    fn export(
        &mut self,
        batch: ExportBatch<'_>,
        policy: ExportPolicy,
    ) -> Result<ExportReport, StoreError>;

    /// Counts the rows currently stored in each table.
    fn row_counts(&self) -> Result<TableCounts, StoreError>;
}
