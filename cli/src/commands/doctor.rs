use anyhow::Context;
use carebook_common::config::Config;
use carebook_common::records::person::Gender;

use crate::session::Session;

pub fn doctor(
    cfg: &Config,
    name: &str,
    age: u32,
    gender: Gender,
    specialty: &str,
) -> anyhow::Result<()> {
    let mut session = Session::open(cfg)?;
    session
        .hospital
        .add_doctor(name, age, gender, specialty)
        .with_context(|| format!("could not add doctor {name}"))?;
    session.save()
}
