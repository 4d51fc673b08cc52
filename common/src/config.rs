use std::path::PathBuf;

use crate::store::ExportPolicy;

pub struct Config {
    /// File holding the serialized registry between invocations.
    pub session_path: PathBuf,
    /// SQLite database that `export` writes to.
    ///
    /// Created together with its tables on first use.
    pub database_path: PathBuf,
    /// How rows that already exist in the database are treated on export.
    pub export_policy: ExportPolicy,
    pub no_banner: bool,
    pub quiet: u8,
}
