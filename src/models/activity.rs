//! Activity kinds recognized by the calorie model.

use serde::{Deserialize, Serialize};

/// Kind of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// Look up a kind by its exact name ("Walking" or "Running").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Walking" => Some(ActivityKind::Walking),
            "Running" => Some(ActivityKind::Running),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_kind_from_name() {
        assert_eq!(ActivityKind::from_name("Walking"), Some(ActivityKind::Walking));
        assert_eq!(ActivityKind::from_name("Running"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_name("Swimming"), None);
        assert_eq!(ActivityKind::from_name("walking"), None);
        assert_eq!(ActivityKind::from_name(""), None);
    }

    #[test]
    fn test_activity_kind_display() {
        assert_eq!(format!("{}", ActivityKind::Walking), "Walking");
        assert_eq!(format!("{}", ActivityKind::Running), "Running");
    }

    #[test]
    fn test_activity_kind_serialization() {
        let json = serde_json::to_string(&ActivityKind::Running).unwrap();
        assert_eq!(json, "\"Running\"");

        let deserialized: ActivityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ActivityKind::Running);
    }
}
