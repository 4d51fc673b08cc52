use carebook_common::config::Config;
use carebook_common::records::person::Gender;

use crate::session::Session;

pub fn patient(
    cfg: &Config,
    id: &str,
    name: &str,
    age: u32,
    gender: Gender,
    disease: &str,
) -> anyhow::Result<()> {
    let mut session = Session::open(cfg)?;
    session.hospital.add_patient(id, name, age, gender, disease);
    session.save()
}
