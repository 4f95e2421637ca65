//! Training record: `<steps>,<activity>,<duration>`.

use chrono::Duration;
use tracing::debug;

use super::{parse_positive_duration, parse_steps, split_fields, ActivityParser, RecordError};
use crate::calculate::{distance, mean_speed, running_calories, walking_calories};
use crate::duration::duration_hours;
use crate::models::{ActivityKind, Person, TrainingSummary};

const FIELD_COUNT: usize = 3;

/// A training session of a named activity.
///
/// The activity name is kept verbatim; it is only resolved to an
/// `ActivityKind` when the record is summarized.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub steps: i64,
    pub activity: String,
    pub duration: Duration,
    pub person: Person,
}

impl TrainingRecord {
    /// Create an empty record for `person`, ready to `parse` lines into.
    pub fn new(person: Person) -> Self {
        Self {
            steps: 0,
            activity: String::new(),
            duration: Duration::zero(),
            person,
        }
    }

    /// Parse a single line into a new record.
    pub fn from_line(line: &str, person: Person) -> Result<Self, RecordError> {
        let mut record = Self::new(person);
        record.parse(line)?;
        Ok(record)
    }

    /// Resolve the activity name to a known kind.
    pub fn activity_kind(&self) -> Result<ActivityKind, RecordError> {
        ActivityKind::from_name(&self.activity)
            .ok_or_else(|| RecordError::UnknownActivity(self.activity.clone()))
    }
}

impl ActivityParser for TrainingRecord {
    type Summary = TrainingSummary;

    fn kind(&self) -> &'static str {
        "training"
    }

    fn parse(&mut self, line: &str) -> Result<(), RecordError> {
        let fields = split_fields(line, FIELD_COUNT)?;

        let steps = parse_steps(fields[0])?;
        let activity = fields[1].trim().to_string();
        let duration = parse_positive_duration(fields[2])?;

        debug!(steps, activity = %activity, duration = %duration, "parsed training record");
        self.steps = steps;
        self.activity = activity;
        self.duration = duration;
        Ok(())
    }

    fn summarize(&self) -> Result<TrainingSummary, RecordError> {
        let activity = self.activity_kind()?;
        let Person { weight, height, .. } = self.person;

        let calories = match activity {
            ActivityKind::Walking => walking_calories(self.steps, weight, height, self.duration),
            ActivityKind::Running => running_calories(self.steps, weight, height, self.duration),
        }?;

        Ok(TrainingSummary {
            activity,
            duration_hours: duration_hours(self.duration),
            distance_km: distance(self.steps, height),
            speed_kmh: mean_speed(self.steps, height, self.duration),
            calories,
        })
    }
}
