use anyhow::Context;
use carebook_common::config::Config;
use carebook_common::store::RecordStore;
use carebook_core::sqlite::SqliteStore;

use crate::session::Session;
use crate::terminal::{format, print};

const KEY_WIDTH: usize = 8;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"), KEY_WIDTH);
    print::aligned_line("Session", cfg.session_path.display().to_string(), KEY_WIDTH);
    print::aligned_line("Database", cfg.database_path.display().to_string(), KEY_WIDTH);
    print::aligned_line("Policy", cfg.export_policy.to_string(), KEY_WIDTH);

    let session = Session::open(cfg)?;
    print::header("in session", cfg.quiet);
    print::as_tree_one_level(format::counts_to_details(&session.hospital.registry().counts()));

    if cfg.database_path.exists() {
        let store = SqliteStore::open(&cfg.database_path)
            .with_context(|| format!("could not open {}", cfg.database_path.display()))?;
        print::header("in database", cfg.quiet);
        print::as_tree_one_level(format::counts_to_details(&store.row_counts()?));
    }
    Ok(())
}
