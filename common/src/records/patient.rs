use serde::{Deserialize, Serialize};

use crate::records::Summary;
use crate::records::person::{Gender, Person};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub person: Person,
    pub disease: String,
}

impl Patient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        disease: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(id, name, age, gender),
            disease: disease.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }
}

impl Summary for Patient {
    fn summary(&self) -> String {
        format!("{}, Disease: {}", self.person.summary(), self.disease)
    }
}
