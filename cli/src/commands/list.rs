use anyhow::Context;
use carebook_common::config::Config;
use carebook_common::records::Summary;
use carebook_core::sqlite::SqliteStore;
use tracing::warn;

use crate::cprint;
use crate::session::Session;
use crate::terminal::{format, print};

pub fn list(cfg: &Config, stored: bool) -> anyhow::Result<()> {
    if stored {
        return list_stored(cfg);
    }

    let session = Session::open(cfg)?;
    let hospital = &session.hospital;
    if hospital.registry().is_empty() {
        warn!("Session {} holds no records", cfg.session_path.display());
        return Ok(());
    }

    print::header("patients", cfg.quiet);
    print_summaries(hospital.patients().iter().map(Summary::summary), "patients");

    print::header("doctors", cfg.quiet);
    print_summaries(hospital.doctors().iter().map(Summary::summary), "doctors");

    print::header("appointments", cfg.quiet);
    print_summaries(
        hospital.appointments().iter().map(Summary::summary),
        "appointments",
    );
    Ok(())
}

fn print_summaries(summaries: impl Iterator<Item = String>, what: &str) {
    let mut empty = true;
    for summary in summaries {
        print::print_status(summary);
        empty = false;
    }
    if empty {
        print::no_records(what);
    }
}

fn list_stored(cfg: &Config) -> anyhow::Result<()> {
    if !cfg.database_path.exists() {
        warn!(
            "Nothing exported yet: {} does not exist",
            cfg.database_path.display()
        );
        return Ok(());
    }

    let store = SqliteStore::open(&cfg.database_path)
        .with_context(|| format!("could not open {}", cfg.database_path.display()))?;

    print::header("stored doctors", cfg.quiet);
    let doctors = store.doctor_rows()?;
    if doctors.is_empty() {
        print::no_records("doctors");
    }
    for (idx, row) in doctors.iter().enumerate() {
        print::tree_head(idx, &row.name);
        print::as_tree_one_level(format::doctor_row_to_details(row));
    }

    cprint!();
    print::header("stored patients", cfg.quiet);
    let patients = store.patient_rows()?;
    if patients.is_empty() {
        print::no_records("patients");
    }
    for (idx, row) in patients.iter().enumerate() {
        print::tree_head(idx, &row.name);
        print::as_tree_one_level(format::patient_row_to_details(row));
    }

    cprint!();
    print::header("stored appointments", cfg.quiet);
    let appointments = store.appointment_rows()?;
    if appointments.is_empty() {
        print::no_records("appointments");
    }
    for (idx, row) in appointments.iter().enumerate() {
        print::tree_head(idx, &row.appointment_id);
        print::as_tree_one_level(format::appointment_row_to_details(row));
    }
    Ok(())
}
