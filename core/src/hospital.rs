//! # Hospital Service
//!
//! Application service behind every front-end action.
//!
//! Owns the [`Registry`] and reads "today" from a [`Clock`] so bookings can
//! be expressed as an offset in days.

use carebook_common::clock::Clock;
use carebook_common::error::{RecordError, StoreError};
use carebook_common::records::appointment::{Appointment, AppointmentView};
use carebook_common::records::doctor::Doctor;
use carebook_common::records::patient::Patient;
use carebook_common::records::person::Gender;
use carebook_common::store::ExportReport;
use carebook_common::success;

use crate::export::ExportService;
use crate::registry::Registry;

pub struct HospitalService {
    registry: Registry,
    clock: Box<dyn Clock>,
}

impl HospitalService {
    pub fn new(registry: Registry, clock: Box<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    pub fn add_patient(
        &mut self,
        id: &str,
        name: &str,
        age: u32,
        gender: Gender,
        disease: &str,
    ) -> &Patient {
        let patient: &Patient = self.registry.add_patient(id, name, age, gender, disease);
        success!("Patient {} added", patient.name());
        patient
    }

    pub fn add_doctor(
        &mut self,
        name: &str,
        age: u32,
        gender: Gender,
        specialty: &str,
    ) -> Result<&Doctor, RecordError> {
        let doctor: &Doctor = self.registry.add_doctor(name, age, gender, specialty)?;
        success!("Doctor {} added as {}", doctor.name(), doctor.id());
        Ok(doctor)
    }

    /// Books an appointment `days_from_now` days after the clock's today.
    pub fn book_appointment(
        &mut self,
        appointment_id: &str,
        patient_id: &str,
        doctor_id: &str,
        days_from_now: u32,
    ) -> Result<&Appointment, RecordError> {
        let today = self.clock.today();
        let appointment: &Appointment = self.registry.book_appointment(
            appointment_id,
            patient_id,
            doctor_id,
            days_from_now,
            today,
        )?;
        success!(
            "Appointment {} booked for {} ({} day(s) from now)",
            appointment.id,
            appointment.date,
            days_from_now
        );
        Ok(appointment)
    }

    pub fn export(&self, exporter: &mut ExportService) -> Result<ExportReport, StoreError> {
        exporter.export_all(&self.registry)
    }

    pub fn patients(&self) -> &[Patient] {
        self.registry.patients()
    }

    pub fn doctors(&self) -> &[Doctor] {
        self.registry.doctors()
    }

    pub fn appointments(&self) -> Vec<AppointmentView<'_>> {
        self.registry.appointment_views().collect()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }
}
