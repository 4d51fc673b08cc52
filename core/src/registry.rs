//! # Registry
//!
//! The session-scoped store of every patient, doctor and appointment.
//!
//! Collections keep insertion order and only ever grow. Lookups are linear
//! scans that return the first record with a matching id; patient and
//! appointment ids are caller-supplied and may repeat.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use carebook_common::error::{RecordError, RecordKind};
use carebook_common::records::appointment::{Appointment, AppointmentView};
use carebook_common::records::doctor::Doctor;
use carebook_common::records::patient::Patient;
use carebook_common::records::person::Gender;
use carebook_common::store::{ExportBatch, TableCounts};

use crate::booking;
use crate::ids::DoctorIdGenerator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    doctor_ids: DoctorIdGenerator,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a patient under a caller-chosen id. Duplicate ids are accepted.
    pub fn add_patient(
        &mut self,
        id: &str,
        name: &str,
        age: u32,
        gender: Gender,
        disease: &str,
    ) -> &Patient {
        debug!("Registering patient {id}");
        let idx: usize = self.patients.len();
        self.patients.push(Patient::new(id, name, age, gender, disease));
        &self.patients[idx]
    }

    /// Appends a doctor under the next id for its specialty.
    pub fn add_doctor(
        &mut self,
        name: &str,
        age: u32,
        gender: Gender,
        specialty: &str,
    ) -> Result<&Doctor, RecordError> {
        let id: String = self.doctor_ids.next_id(specialty)?;
        debug!("Registering doctor {id}");
        let idx: usize = self.doctors.len();
        self.doctors.push(Doctor::new(id, name, age, gender, specialty));
        Ok(&self.doctors[idx])
    }

    /// Books `appointment_id` between an existing patient and doctor,
    /// `days_from_now` calendar days after `today`.
    ///
    /// The patient is checked before the doctor. On any failure the registry
    /// is left untouched.
    pub fn book_appointment(
        &mut self,
        appointment_id: &str,
        patient_id: &str,
        doctor_id: &str,
        days_from_now: u32,
        today: NaiveDate,
    ) -> Result<&Appointment, RecordError> {
        if self.patient(patient_id).is_none() {
            return Err(RecordError::ReferenceNotFound {
                kind: RecordKind::Patient,
                id: patient_id.to_string(),
            });
        }
        if self.doctor(doctor_id).is_none() {
            return Err(RecordError::ReferenceNotFound {
                kind: RecordKind::Doctor,
                id: doctor_id.to_string(),
            });
        }

        let date: NaiveDate = booking::date_after(today, days_from_now)?;
        debug!("Booking appointment {appointment_id} on {date}");

        let idx: usize = self.appointments.len();
        self.appointments
            .push(Appointment::new(appointment_id, patient_id, doctor_id, date));
        Ok(&self.appointments[idx])
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id() == id)
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id() == id)
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|appointment| appointment.id == id)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Joins an appointment with the patient and doctor it names.
    pub fn resolve<'a>(&'a self, appointment: &'a Appointment) -> Option<AppointmentView<'a>> {
        Some(AppointmentView {
            appointment,
            patient: self.patient(&appointment.patient_id)?,
            doctor: self.doctor(&appointment.doctor_id)?,
        })
    }

    /// Every appointment in booking order, joined with its records.
    ///
    /// Appointments naming a record the registry does not hold are skipped
    /// with a warning.
    pub fn appointment_views(&self) -> impl Iterator<Item = AppointmentView<'_>> {
        self.appointments.iter().filter_map(move |appointment| {
            let view = self.resolve(appointment);
            if view.is_none() {
                warn!(
                    "Appointment {} references unknown patient '{}' or doctor '{}'",
                    appointment.id, appointment.patient_id, appointment.doctor_id
                );
            }
            view
        })
    }

    pub fn export_batch(&self) -> ExportBatch<'_> {
        ExportBatch {
            doctors: &self.doctors,
            patients: &self.patients,
            appointments: &self.appointments,
        }
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            doctors: self.doctors.len(),
            patients: self.patients.len(),
            appointments: self.appointments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty() && self.doctors.is_empty() && self.appointments.is_empty()
    }
}
