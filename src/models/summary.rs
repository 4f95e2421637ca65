//! Computed activity summaries and their text rendering.

use serde::{Deserialize, Serialize};

use super::ActivityKind;

/// Metrics for a day-steps record (always walking).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsSummary {
    pub steps: i64,

    /// Distance in kilometers
    pub distance_km: f64,

    /// Calories burned (kcal)
    pub calories: f64,
}

impl std::fmt::Display for StepsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Step count: {}.", self.steps)?;
        writeln!(f, "Distance covered {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned {:.2} kcal.", self.calories)
    }
}

/// Metrics for a typed training record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub activity: ActivityKind,

    pub duration_hours: f64,

    /// Distance in kilometers
    pub distance_km: f64,

    /// Mean speed in km/h
    pub speed_kmh: f64,

    /// Calories burned (kcal)
    pub calories: f64,
}

impl std::fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Activity: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}
