mod commands;
mod session;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, book, doctor, export, info, list, patient, reset};
use carebook_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);
    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match run(commands.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Patient { id, name, age, gender, disease } => {
            print::header("add patient", cfg.quiet);
            patient::patient(cfg, &id, &name, age, gender, &disease)
        }
        Commands::Doctor { name, age, gender, specialty } => {
            print::header("add doctor", cfg.quiet);
            doctor::doctor(cfg, &name, age, gender, &specialty)
        }
        Commands::Book { id, patient, doctor, days } => {
            print::header("book appointment", cfg.quiet);
            book::book(cfg, &id, &patient, &doctor, days)
        }
        Commands::List { stored } => list::list(cfg, stored),
        Commands::Export => {
            print::header("export to database", cfg.quiet);
            export::export(cfg)
        }
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(cfg)
        }
        Commands::Reset => reset::reset(cfg),
    }
}
