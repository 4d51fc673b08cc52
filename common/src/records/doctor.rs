use serde::{Deserialize, Serialize};

use crate::records::Summary;
use crate::records::person::{Gender, Person};

/// A doctor on record. The id is always assigned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub person: Person,
    pub specialty: String,
}

impl Doctor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(id, name, age, gender),
            specialty: specialty.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }
}

impl Summary for Doctor {
    fn summary(&self) -> String {
        format!("{}, Specialty: {}", self.person.summary(), self.specialty)
    }
}
