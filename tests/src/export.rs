#![cfg(test)]
use carebook_common::records::person::Gender;
use carebook_common::store::{ExportPolicy, RecordStore, TableCounts, TableReport};
use carebook_core::export::ExportService;
use carebook_core::sqlite::{AppointmentRow, DoctorRow, PatientRow, SqliteStore};

use crate::utils::hospital;

#[test]
fn full_session_exports_one_row_per_record() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    let doctor_id = hospital
        .add_doctor("Bob", 45, Gender::Male, "Cardiology")
        .unwrap()
        .id()
        .to_string();
    assert_eq!(doctor_id, "CA01");

    let appointment = hospital
        .book_appointment("A1", "P1", "CA01", 3)
        .unwrap()
        .clone();
    assert_eq!(appointment.date.to_string(), "2024-03-01");

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("hospital.db");
    let mut exporter = ExportService::new(
        Box::new(SqliteStore::open(&db_path).unwrap()),
        ExportPolicy::InsertIfAbsent,
    );

    let report = hospital.export(&mut exporter).unwrap();
    assert_eq!(report.written(), 3);

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(
        store.doctor_rows().unwrap(),
        vec![DoctorRow {
            person_id: "CA01".into(),
            name: "Bob".into(),
            specialty: "Cardiology".into(),
        }]
    );
    assert_eq!(
        store.patient_rows().unwrap(),
        vec![PatientRow {
            person_id: "P1".into(),
            name: "Alice".into(),
            age: 30,
        }]
    );
    assert_eq!(
        store.appointment_rows().unwrap(),
        vec![AppointmentRow {
            appointment_id: "A1".into(),
            patient_id: "P1".into(),
            doctor_id: "CA01".into(),
            date: "2024-03-01".into(),
        }]
    );
}

#[test]
fn exporting_twice_creates_no_duplicates() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    hospital.add_patient("P2", "Carl", 64, Gender::Male, "Diabetes");
    hospital.add_doctor("Bob", 45, Gender::Male, "Cardiology").unwrap();
    hospital.add_doctor("Ann", 52, Gender::Female, "Neurology").unwrap();
    hospital.book_appointment("A1", "P1", "CA01", 1).unwrap();
    hospital.book_appointment("A2", "P2", "NE01", 2).unwrap();

    let mut exporter = ExportService::new(
        Box::new(SqliteStore::open_in_memory().unwrap()),
        ExportPolicy::InsertIfAbsent,
    );

    let first = hospital.export(&mut exporter).unwrap();
    let second = hospital.export(&mut exporter).unwrap();

    assert_eq!(first.written(), 6);
    assert_eq!(second.written(), 0);
    assert_eq!(second.skipped(), 6);
    assert_eq!(
        exporter.stored_counts().unwrap(),
        TableCounts {
            doctors: 2,
            patients: 2,
            appointments: 2,
        }
    );
    assert_eq!(exporter.stored_counts().unwrap(), hospital.registry().counts());
}

#[test]
fn records_added_after_an_export_are_picked_up_next_time() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    hospital.add_doctor("Bob", 45, Gender::Male, "Cardiology").unwrap();

    let mut exporter = ExportService::new(
        Box::new(SqliteStore::open_in_memory().unwrap()),
        ExportPolicy::InsertIfAbsent,
    );
    hospital.export(&mut exporter).unwrap();

    hospital.book_appointment("A1", "P1", "CA01", 1).unwrap();
    let report = hospital.export(&mut exporter).unwrap();

    assert_eq!(report.appointments, TableReport { written: 1, skipped: 0 });
    assert_eq!(report.patients, TableReport { written: 0, skipped: 1 });
    assert_eq!(report.doctors, TableReport { written: 0, skipped: 1 });
}

#[test]
fn duplicate_patient_ids_keep_the_first_row() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    hospital.add_patient("P1", "Carol", 41, Gender::Female, "Asthma");

    let mut store = SqliteStore::open_in_memory().unwrap();
    let report = store
        .export(hospital.registry().export_batch(), ExportPolicy::InsertIfAbsent)
        .unwrap();

    assert_eq!(report.patients, TableReport { written: 1, skipped: 1 });
    assert_eq!(store.patient_rows().unwrap()[0].name, "Alice");
}

#[test]
fn overwrite_keeps_the_first_duplicate_and_settles() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    hospital.add_patient("P1", "Carol", 41, Gender::Female, "Asthma");
    let mut exporter = ExportService::new(
        Box::new(SqliteStore::open_in_memory().unwrap()),
        ExportPolicy::Overwrite,
    );

    let first = hospital.export(&mut exporter).unwrap();
    let second = hospital.export(&mut exporter).unwrap();

    assert_eq!(first.patients, TableReport { written: 1, skipped: 1 });
    assert_eq!(second.patients, TableReport { written: 0, skipped: 2 });
    assert_eq!(hospital.registry().patient("P1").unwrap().name(), "Alice");
    assert_eq!(exporter.stored_counts().unwrap().patients, 1);
    assert_eq!(exporter.policy(), ExportPolicy::Overwrite);
}

#[test]
fn empty_registry_exports_nothing() {
    let hospital = hospital();
    let mut exporter = ExportService::new(
        Box::new(SqliteStore::open_in_memory().unwrap()),
        ExportPolicy::Overwrite,
    );

    let report = hospital.export(&mut exporter).unwrap();

    assert_eq!(report.written() + report.skipped(), 0);
    assert_eq!(exporter.stored_counts().unwrap(), TableCounts::default());
}
