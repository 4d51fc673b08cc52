use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::Summary;
use crate::records::doctor::Doctor;
use crate::records::patient::Patient;

/// A booked visit. Patient and doctor are held as ids and resolved
/// through the registry when the full records are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub date: NaiveDate,
}

impl Appointment {
    pub fn new(
        id: impl Into<String>,
        patient_id: impl Into<String>,
        doctor_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            date,
        }
    }
}

/// An appointment joined with the records it references.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentView<'a> {
    pub appointment: &'a Appointment,
    pub patient: &'a Patient,
    pub doctor: &'a Doctor,
}

impl Summary for AppointmentView<'_> {
    fn summary(&self) -> String {
        format!(
            "Appointment ID: {}, Date: {}, Patient: {}, Doctor: {}",
            self.appointment.id,
            self.appointment.date,
            self.patient.name(),
            self.doctor.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::person::Gender;

    #[test]
    fn view_summary_uses_names() {
        let patient = Patient::new("P1", "Alice", 30, Gender::Female, "Flu");
        let doctor = Doctor::new("CA01", "Bob", 45, Gender::Male, "Cardiology");
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let appointment = Appointment::new("A1", "P1", "CA01", date);

        let view = AppointmentView {
            appointment: &appointment,
            patient: &patient,
            doctor: &doctor,
        };

        assert_eq!(
            view.summary(),
            "Appointment ID: A1, Date: 2024-03-04, Patient: Alice, Doctor: Bob"
        );
    }
}
