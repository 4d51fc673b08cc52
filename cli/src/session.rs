use carebook_common::config::Config;
use carebook_common::session::SessionRepository;
use carebook_core::clock::LocalClock;
use carebook_core::hospital::HospitalService;
use carebook_core::registry::Registry;
use carebook_core::session::JsonSessionRepo;

/// The registry loaded from the session file, ready to be driven.
pub struct Session {
    repo: JsonSessionRepo,
    pub hospital: HospitalService,
}

impl Session {
    pub fn open(cfg: &Config) -> anyhow::Result<Self> {
        let repo = JsonSessionRepo::new(&cfg.session_path);
        let loaded: Option<Registry> = repo.load()?;
        let hospital = HospitalService::new(loaded.unwrap_or_default(), Box::new(LocalClock));
        Ok(Self { repo, hospital })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.repo.save(self.hospital.registry())
    }
}
