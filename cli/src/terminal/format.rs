use colored::*;

use carebook_common::store::{ExportReport, TableCounts, TableReport};
use carebook_core::sqlite::{AppointmentRow, DoctorRow, PatientRow};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn doctor_row_to_details(row: &DoctorRow) -> Vec<Detail> {
    vec![
        ("ID".to_string(), row.person_id.color(colors::RECORD_ID)),
        ("Specialty".to_string(), row.specialty.normal()),
    ]
}

pub fn patient_row_to_details(row: &PatientRow) -> Vec<Detail> {
    vec![
        ("ID".to_string(), row.person_id.color(colors::RECORD_ID)),
        ("Age".to_string(), row.age.to_string().normal()),
    ]
}

pub fn appointment_row_to_details(row: &AppointmentRow) -> Vec<Detail> {
    vec![
        ("Date".to_string(), row.date.color(colors::DATE)),
        ("Patient".to_string(), row.patient_id.color(colors::RECORD_ID)),
        ("Doctor".to_string(), row.doctor_id.color(colors::RECORD_ID)),
    ]
}

pub fn report_to_details(report: &ExportReport) -> Vec<Detail> {
    vec![
        ("Doctors".to_string(), table_report(&report.doctors)),
        ("Patients".to_string(), table_report(&report.patients)),
        ("Appointments".to_string(), table_report(&report.appointments)),
    ]
}

pub fn counts_to_details(counts: &TableCounts) -> Vec<Detail> {
    vec![
        ("Doctors".to_string(), counts.doctors.to_string().bold()),
        ("Patients".to_string(), counts.patients.to_string().bold()),
        ("Appointments".to_string(), counts.appointments.to_string().bold()),
    ]
}

fn table_report(report: &TableReport) -> ColoredString {
    let written: ColoredString = format!("{} written", report.written).green().bold();
    let skipped: ColoredString = format!("{} already present", report.skipped).yellow();
    format!("{written}, {skipped}").normal()
}
