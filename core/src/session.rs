use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use carebook_common::session::SessionRepository;

/// Stores session state as a JSON document on disk.
///
/// Saves go through a sibling temporary file and a rename, so the session
/// file is always either the old or the new state.
pub struct JsonSessionRepo {
    path: PathBuf,
}

impl JsonSessionRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl<T> SessionRepository<T> for JsonSessionRepo
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> anyhow::Result<Option<T>> {
        if !self.path.exists() {
            debug!("No session at {}, starting fresh", self.path.display());
            return Ok(None);
        }

        let raw: String = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session {}", self.path.display()))?;
        let state: T = serde_json::from_str(&raw)
            .with_context(|| format!("session {} is corrupt", self.path.display()))?;
        Ok(Some(state))
    }

    fn save(&self, state: &T) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let raw: String = serde_json::to_string_pretty(state)?;
        let staging: PathBuf = self.staging_path();
        fs::write(&staging, raw)
            .with_context(|| format!("failed to write {}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .with_context(|| format!("failed to replace session {}", self.path.display()))?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("failed to remove session {}", self.path.display()))?;
        Ok(true)
    }
}
