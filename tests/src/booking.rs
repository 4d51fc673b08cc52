#![cfg(test)]
use carebook_common::error::{RecordError, RecordKind};
use carebook_common::records::Summary;
use carebook_common::records::person::Gender;
use carebook_core::clock::LocalClock;
use carebook_core::hospital::HospitalService;
use carebook_core::registry::Registry;
use chrono::{Days, Local};

use crate::utils::{hospital, today};

#[test]
fn doctors_sharing_a_specialty_get_consecutive_ids() {
    let mut hospital = hospital();
    let ids: Vec<String> = ["Bob", "Dan", "Eve"]
        .iter()
        .map(|name| {
            hospital
                .add_doctor(name, 40, Gender::Male, "Cardiology")
                .unwrap()
                .id()
                .to_string()
        })
        .collect();

    assert_eq!(ids, ["CA01", "CA02", "CA03"]);
}

#[test]
fn specialties_with_same_two_letters_continue_one_sequence() {
    let mut hospital = hospital();
    hospital.add_doctor("Bob", 45, Gender::Male, "Cardiology").unwrap();
    hospital.add_doctor("Ann", 52, Gender::Female, "Dermatology").unwrap();
    let surgeon = hospital
        .add_doctor("Eve", 38, Gender::Female, "cardiac surgery")
        .unwrap();

    assert_eq!(surgeon.id(), "CA02");
}

#[test]
fn booking_with_missing_doctor_records_nothing() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");

    let err = hospital
        .book_appointment("A1", "P1", "ZZ99", 1)
        .unwrap_err();

    assert_eq!(
        err,
        RecordError::ReferenceNotFound {
            kind: RecordKind::Doctor,
            id: "ZZ99".into()
        }
    );
    assert!(hospital.appointments().is_empty());
    assert!(hospital.registry().appointments().is_empty());
}

#[test]
fn booking_with_missing_patient_records_nothing() {
    let mut hospital = hospital();
    hospital.add_doctor("Bob", 45, Gender::Male, "Cardiology").unwrap();

    let err = hospital
        .book_appointment("A1", "P404", "CA01", 1)
        .unwrap_err();

    assert!(matches!(
        err,
        RecordError::ReferenceNotFound { kind: RecordKind::Patient, .. }
    ));
    assert!(hospital.registry().appointments().is_empty());
}

#[test]
fn booking_lands_exactly_n_days_out() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    hospital.add_doctor("Bob", 45, Gender::Male, "Cardiology").unwrap();

    for days in [1, 2, 3, 30] {
        let appointment = hospital
            .book_appointment(&format!("A{days}"), "P1", "CA01", days)
            .unwrap();
        assert_eq!(appointment.date, today() + Days::new(u64::from(days)));
    }

    // 2024 is a leap year.
    let leap = hospital.registry().appointment("A2").unwrap();
    assert_eq!(leap.date.to_string(), "2024-02-29");
}

#[test]
fn booking_with_local_clock_uses_todays_date() {
    let mut hospital = HospitalService::new(Registry::new(), Box::new(LocalClock));
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    hospital.add_doctor("Bob", 45, Gender::Male, "Cardiology").unwrap();

    let before = Local::now().date_naive();
    let date = hospital
        .book_appointment("A1", "P1", "CA01", 3)
        .unwrap()
        .date;
    let after = Local::now().date_naive();

    assert!(date == before + Days::new(3) || date == after + Days::new(3));
}

#[test]
fn appointment_view_resolves_booked_records() {
    let mut hospital = hospital();
    hospital.add_patient("P1", "Alice", 30, Gender::Female, "Flu");
    hospital.add_doctor("Bob", 45, Gender::Male, "Cardiology").unwrap();
    hospital.book_appointment("A1", "P1", "CA01", 1).unwrap();

    let mut registry = hospital.into_registry();
    let fresh = registry.add_doctor("Zed", 60, Gender::Male, "Cardiology").unwrap();
    assert_eq!(fresh.id(), "CA02");

    let view = registry.appointment_views().next().unwrap();
    assert_eq!(
        view.summary(),
        "Appointment ID: A1, Date: 2024-02-28, Patient: Alice, Doctor: Bob"
    );
}
