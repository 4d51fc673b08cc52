use anyhow::Context;
use carebook_common::config::Config;

use crate::session::Session;

pub fn book(
    cfg: &Config,
    appointment_id: &str,
    patient_id: &str,
    doctor_id: &str,
    days: u32,
) -> anyhow::Result<()> {
    let mut session = Session::open(cfg)?;
    session
        .hospital
        .book_appointment(appointment_id, patient_id, doctor_id, days)
        .with_context(|| format!("could not book appointment {appointment_id}"))?;
    session.save()
}
