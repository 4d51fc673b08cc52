pub mod book;
pub mod doctor;
pub mod export;
pub mod info;
pub mod list;
pub mod patient;
pub mod reset;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use carebook_common::config::Config;
use carebook_common::records::person::Gender;
use carebook_common::store::ExportPolicy;

#[derive(Parser)]
#[command(name = "carebook", version)]
#[command(about = "Hospital records: patients, doctors and appointments.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Session file that keeps records between runs
    #[arg(long, global = true, default_value = "carebook-session.json")]
    pub session: PathBuf,

    /// SQLite database written by `export`
    #[arg(long, global = true, default_value = "carebook.db")]
    pub database: PathBuf,

    /// How `export` treats rows that already exist: insert-if-absent or overwrite
    #[arg(long, global = true, default_value_t = ExportPolicy::InsertIfAbsent)]
    pub policy: ExportPolicy,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a patient
    #[command(alias = "p")]
    Patient {
        #[arg(long, value_parser = non_blank)]
        id: String,
        #[arg(long, value_parser = non_blank)]
        name: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        age: u32,
        /// male or female
        #[arg(long)]
        gender: Gender,
        #[arg(long, value_parser = non_blank, default_value = "Other")]
        disease: String,
    },
    /// Register a doctor; the id is derived from the specialty
    #[command(alias = "d")]
    Doctor {
        #[arg(long, value_parser = non_blank)]
        name: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(25..=100))]
        age: u32,
        /// male or female
        #[arg(long)]
        gender: Gender,
        #[arg(long, value_parser = non_blank)]
        specialty: String,
    },
    /// Book an appointment between a registered patient and doctor
    #[command(alias = "b")]
    Book {
        #[arg(long, value_parser = non_blank)]
        id: String,
        /// Patient id
        #[arg(long, value_parser = non_blank)]
        patient: String,
        /// Doctor id (e.g. CA01)
        #[arg(long, value_parser = non_blank)]
        doctor: String,
        /// Schedule this many days from today
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=30))]
        days: u32,
    },
    /// Show every patient, doctor and appointment in the session
    #[command(alias = "l")]
    List {
        /// Show the rows stored in the database instead
        #[arg(long)]
        stored: bool,
    },
    /// Write all records to the database
    #[command(alias = "e")]
    Export,
    /// Show paths, policy and record counts
    #[command(alias = "i")]
    Info,
    /// Discard the session, including doctor id sequences
    Reset,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            session_path: self.session.clone(),
            database_path: self.database.clone(),
            export_policy: self.policy,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}

fn non_blank(s: &str) -> Result<String, String> {
    let trimmed: &str = s.trim();
    if trimmed.is_empty() {
        return Err("value must not be blank".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_patient_with_default_disease() {
        let cli = CommandLine::try_parse_from([
            "carebook", "patient", "--id", "P1", "--name", "Alice", "--age", "30", "--gender",
            "Female",
        ])
        .unwrap();

        match cli.command {
            Commands::Patient { id, gender, disease, .. } => {
                assert_eq!(id, "P1");
                assert_eq!(gender, Gender::Female);
                assert_eq!(disease, "Other");
            }
            _ => panic!("expected patient command"),
        }
    }

    #[test]
    fn rejects_blank_and_out_of_range_input() {
        assert!(CommandLine::try_parse_from([
            "carebook", "patient", "--id", "  ", "--name", "Alice", "--age", "30", "--gender",
            "female",
        ])
        .is_err());
        assert!(CommandLine::try_parse_from([
            "carebook", "doctor", "--name", "Bob", "--age", "24", "--gender", "male",
            "--specialty", "Cardiology",
        ])
        .is_err());
        assert!(CommandLine::try_parse_from([
            "carebook", "book", "--id", "A1", "--patient", "P1", "--doctor", "CA01", "--days",
            "31",
        ])
        .is_err());
    }

    #[test]
    fn book_defaults_to_one_day_and_global_flags_build_config() {
        let cli = CommandLine::try_parse_from([
            "carebook", "b", "--id", "A1", "--patient", "P1", "--doctor", "CA01", "--policy",
            "overwrite", "-qq",
        ])
        .unwrap();

        let cfg = cli.config();
        assert_eq!(cfg.export_policy, ExportPolicy::Overwrite);
        assert_eq!(cfg.quiet, 2);
        assert!(matches!(cli.command, Commands::Book { days: 1, .. }));
    }
}
