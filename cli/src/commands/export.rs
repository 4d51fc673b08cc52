use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::info_span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use carebook_common::config::Config;
use carebook_common::store::{ExportPolicy, ExportReport};
use carebook_core::export::ExportService;
use carebook_core::sqlite::SqliteStore;

use crate::session::Session;
use crate::terminal::{colors, format, print, spinner};

pub fn export(cfg: &Config) -> anyhow::Result<()> {
    let session = Session::open(cfg)?;
    let store = SqliteStore::open(&cfg.database_path)
        .with_context(|| format!("could not open {}", cfg.database_path.display()))?;
    let mut exporter = ExportService::new(Box::new(store), cfg.export_policy);

    let span = info_span!("export", indicatif.pb_show = true);
    span.pb_set_style(&spinner::style());
    span.pb_set_message(&format!("Writing records to {}", cfg.database_path.display()));

    let start_time: Instant = Instant::now();
    let report: ExportReport = {
        let _guard = span.enter();
        session
            .hospital
            .export(&mut exporter)
            .context("export failed, nothing was written")?
    };
    drop(span);

    export_ends(&report, exporter.policy(), start_time.elapsed(), cfg);
    Ok(())
}

fn export_ends(report: &ExportReport, policy: ExportPolicy, total_time: Duration, cfg: &Config) {
    print::header("export report", cfg.quiet);
    print::as_tree_one_level(format::report_to_details(report));

    let written: ColoredString = format!("{} rows written", report.written()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Export complete ({policy}): {written} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&output.to_string());
    }
}
