use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::records::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = RecordError;

    /// Parses "male"/"m" or "female"/"f", ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(RecordError::InvalidGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// Identity and demographic fields every person on record carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gender,
        }
    }
}

impl Summary for Person {
    fn summary(&self) -> String {
        format!(
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id, self.name, self.age, self.gender
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" MALE ".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn gender_rejects_unknown_values() {
        let err = "other".parse::<Gender>().unwrap_err();
        assert_eq!(err, RecordError::InvalidGender("other".into()));
    }

    #[test]
    fn person_summary_lists_base_fields() {
        let person = Person::new("P1", "Alice", 30, Gender::Female);
        assert_eq!(person.summary(), "ID: P1, Name: Alice, Age: 30, Gender: Female");
    }
}
