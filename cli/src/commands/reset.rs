use carebook_common::config::Config;
use carebook_common::session::SessionRepository;
use carebook_common::success;
use carebook_core::registry::Registry;
use carebook_core::session::JsonSessionRepo;
use tracing::warn;

pub fn reset(cfg: &Config) -> anyhow::Result<()> {
    let repo = JsonSessionRepo::new(&cfg.session_path);
    if SessionRepository::<Registry>::clear(&repo)? {
        success!("Session {} discarded", cfg.session_path.display());
    } else {
        warn!("No session at {}", cfg.session_path.display());
    }
    Ok(())
}
