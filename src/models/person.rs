//! Person profile model.

use serde::{Deserialize, Serialize};

/// Body measurements the metrics are computed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Weight in kilograms
    pub weight: f64,

    /// Height in meters
    pub height: f64,
}

impl Person {
    pub fn new(name: impl Into<String>, weight: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new("athlete", 75.0, 1.75)
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Weight: {:.2} kg.", self.weight)?;
        writeln!(f, "Height: {:.2} m.", self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_person_display() {
        let person = Person::new("Ivan", 75.0, 1.75);
        assert_eq!(
            person.to_string(),
            "Name: Ivan\nWeight: 75.00 kg.\nHeight: 1.75 m.\n"
        );
    }

    #[test]
    fn test_person_display_zero_values() {
        let person = Person::new("", 0.0, 0.0);
        assert_eq!(person.to_string(), "Name: \nWeight: 0.00 kg.\nHeight: 0.00 m.\n");
    }

    #[test]
    fn test_person_display_fractional() {
        let person = Person::new("Petr", 75.5, 1.85);
        assert_eq!(
            person.to_string(),
            "Name: Petr\nWeight: 75.50 kg.\nHeight: 1.85 m.\n"
        );
    }

    #[test]
    fn test_person_deserialize_without_name() {
        let person: Person = toml::from_str("weight = 60.0\nheight = 1.8\n").unwrap();
        assert_eq!(person.name, "");
        assert_eq!(person.weight, 60.0);
    }
}
