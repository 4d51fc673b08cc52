//! # SQLite Record Store
//!
//! [`RecordStore`] backed by a SQLite database file.
//!
//! The schema is created on open when missing and foreign keys are enforced,
//! so an appointment row can only land next to its patient and doctor rows.
//! Every export runs inside a single transaction; dropping it on error rolls
//! the whole batch back.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rusqlite::{Connection, Statement, Transaction, params};
use tracing::debug;

use carebook_common::error::StoreError;
use carebook_common::records::appointment::Appointment;
use carebook_common::records::doctor::Doctor;
use carebook_common::records::patient::Patient;
use carebook_common::store::{
    ExportBatch, ExportPolicy, ExportReport, RecordStore, TableCounts, TableReport,
};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS Doctors (
        person_id TEXT PRIMARY KEY,
        name TEXT,
        specialty TEXT
    );
    CREATE TABLE IF NOT EXISTS Patients (
        person_id TEXT PRIMARY KEY,
        name TEXT,
        age INTEGER
    );
    CREATE TABLE IF NOT EXISTS Appointments (
        appointment_id TEXT PRIMARY KEY,
        patient_id TEXT REFERENCES Patients(person_id),
        doctor_id TEXT REFERENCES Doctors(person_id),
        date TEXT
    );
";

/// Maps a record onto its table row.
trait Row {
    const TABLE: &'static str;
    const INSERT_IF_ABSENT: &'static str;
    const OVERWRITE: &'static str;

    fn key(&self) -> &str;

    /// Runs the prepared insert for this record, returning the number of changed rows.
    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize>;
}

impl Row for Doctor {
    const TABLE: &'static str = "Doctors";
    const INSERT_IF_ABSENT: &'static str = "
        INSERT INTO Doctors (person_id, name, specialty) VALUES (?1, ?2, ?3)
        ON CONFLICT(person_id) DO NOTHING";
    const OVERWRITE: &'static str = "
        INSERT INTO Doctors (person_id, name, specialty) VALUES (?1, ?2, ?3)
        ON CONFLICT(person_id) DO UPDATE SET name = excluded.name, specialty = excluded.specialty
        WHERE Doctors.name IS NOT excluded.name OR Doctors.specialty IS NOT excluded.specialty";

    fn key(&self) -> &str {
        self.id()
    }

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.id(), self.name(), self.specialty])
    }
}

impl Row for Patient {
    const TABLE: &'static str = "Patients";
    const INSERT_IF_ABSENT: &'static str = "
        INSERT INTO Patients (person_id, name, age) VALUES (?1, ?2, ?3)
        ON CONFLICT(person_id) DO NOTHING";
    const OVERWRITE: &'static str = "
        INSERT INTO Patients (person_id, name, age) VALUES (?1, ?2, ?3)
        ON CONFLICT(person_id) DO UPDATE SET name = excluded.name, age = excluded.age
        WHERE Patients.name IS NOT excluded.name OR Patients.age IS NOT excluded.age";

    fn key(&self) -> &str {
        self.id()
    }

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.id(), self.name(), self.person.age])
    }
}

impl Row for Appointment {
    const TABLE: &'static str = "Appointments";
    const INSERT_IF_ABSENT: &'static str = "
        INSERT INTO Appointments (appointment_id, patient_id, doctor_id, date) VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(appointment_id) DO NOTHING";
    const OVERWRITE: &'static str = "
        INSERT INTO Appointments (appointment_id, patient_id, doctor_id, date) VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(appointment_id) DO UPDATE SET
            patient_id = excluded.patient_id, doctor_id = excluded.doctor_id, date = excluded.date
        WHERE Appointments.patient_id IS NOT excluded.patient_id
            OR Appointments.doctor_id IS NOT excluded.doctor_id
            OR Appointments.date IS NOT excluded.date";

    fn key(&self) -> &str {
        &self.id
    }

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.id,
            self.patient_id,
            self.doctor_id,
            self.date.to_string()
        ])
    }
}

/// A `Doctors` row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRow {
    pub person_id: String,
    pub name: String,
    pub specialty: String,
}

/// A `Patients` row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRow {
    pub person_id: String,
    pub name: String,
    pub age: u32,
}

/// An `Appointments` row as stored. `date` is ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub appointment_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`, creating parent directories
    /// and missing tables.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::open(path, e))?;
        }

        let conn: Connection = Connection::open(path).map_err(|e| StoreError::open(path, e))?;
        debug!("Opened record store at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn: Connection =
            Connection::open_in_memory().map_err(|e| StoreError::open(":memory:", e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| StoreError::Schema(e.into()))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| StoreError::Schema(e.into()))?;
        Ok(Self { conn })
    }

    pub fn doctor_rows(&self) -> Result<Vec<DoctorRow>, StoreError> {
        self.query_rows(
            "SELECT person_id, name, specialty FROM Doctors ORDER BY person_id",
            |row| {
                Ok(DoctorRow {
                    person_id: row.get(0)?,
                    name: row.get(1)?,
                    specialty: row.get(2)?,
                })
            },
        )
    }

    pub fn patient_rows(&self) -> Result<Vec<PatientRow>, StoreError> {
        self.query_rows(
            "SELECT person_id, name, age FROM Patients ORDER BY person_id",
            |row| {
                Ok(PatientRow {
                    person_id: row.get(0)?,
                    name: row.get(1)?,
                    age: row.get(2)?,
                })
            },
        )
    }

    pub fn appointment_rows(&self) -> Result<Vec<AppointmentRow>, StoreError> {
        self.query_rows(
            "SELECT appointment_id, patient_id, doctor_id, date FROM Appointments ORDER BY appointment_id",
            |row| {
                Ok(AppointmentRow {
                    appointment_id: row.get(0)?,
                    patient_id: row.get(1)?,
                    doctor_id: row.get(2)?,
                    date: row.get(3)?,
                })
            },
        )
    }

    fn query_rows<T, F>(&self, sql: &str, map: F) -> Result<Vec<T>, StoreError>
    where
        F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt: Statement<'_> = self
            .conn
            .prepare(sql)
            .map_err(|e| StoreError::Query(e.into()))?;
        let rows = stmt
            .query_map([], map)
            .map_err(|e| StoreError::Query(e.into()))?;

        rows.collect::<rusqlite::Result<Vec<T>>>()
            .map_err(|e| StoreError::Query(e.into()))
    }

    fn count(&self, table: &str) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .map_err(|e| StoreError::Query(e.into()))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

impl RecordStore for SqliteStore {
    fn export(
        &mut self,
        batch: ExportBatch<'_>,
        policy: ExportPolicy,
    ) -> Result<ExportReport, StoreError> {
        let tx: Transaction<'_> = self
            .conn
            .transaction()
            .map_err(|e| StoreError::Transaction(e.into()))?;

        let report = ExportReport {
            doctors: write_rows(&tx, batch.doctors, policy)?,
            patients: write_rows(&tx, batch.patients, policy)?,
            appointments: write_rows(&tx, batch.appointments, policy)?,
        };

        tx.commit().map_err(|e| StoreError::Transaction(e.into()))?;
        Ok(report)
    }

    fn row_counts(&self) -> Result<TableCounts, StoreError> {
        Ok(TableCounts {
            doctors: self.count(Doctor::TABLE)?,
            patients: self.count(Patient::TABLE)?,
            appointments: self.count(Appointment::TABLE)?,
        })
    }
}

fn write_rows<R: Row>(
    tx: &Transaction<'_>,
    rows: &[R],
    policy: ExportPolicy,
) -> Result<TableReport, StoreError> {
    let sql: &str = match policy {
        ExportPolicy::InsertIfAbsent => R::INSERT_IF_ABSENT,
        ExportPolicy::Overwrite => R::OVERWRITE,
    };
    let mut stmt: Statement<'_> = tx
        .prepare(sql)
        .map_err(|e| StoreError::Query(e.into()))?;

    // First occurrence of a key wins, matching registry lookups.
    let mut seen: HashSet<&str> = HashSet::with_capacity(rows.len());
    let mut report = TableReport::default();
    for row in rows {
        if !seen.insert(row.key()) {
            debug!("{}: duplicate '{}' skipped", R::TABLE, row.key());
            report.skipped += 1;
            continue;
        }
        let changed: usize = row
            .execute(&mut stmt)
            .map_err(|e| StoreError::write(R::TABLE, row.key(), e))?;
        match changed {
            0 => report.skipped += 1,
            _ => report.written += 1,
        }
    }

    debug!(
        "{}: {} written, {} skipped",
        R::TABLE,
        report.written,
        report.skipped
    );
    Ok(report)
}
