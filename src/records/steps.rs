//! Day-steps record: `<steps>,<duration>`.

use chrono::Duration;
use tracing::debug;

use super::{parse_positive_duration, parse_steps, split_fields, ActivityParser, RecordError};
use crate::calculate::{distance, walking_calories};
use crate::models::{Person, StepsSummary};

const FIELD_COUNT: usize = 2;

/// Steps walked over a period of time.
#[derive(Debug, Clone, PartialEq)]
pub struct StepsRecord {
    pub steps: i64,
    pub duration: Duration,
    pub person: Person,
}

impl StepsRecord {
    /// Create an empty record for `person`, ready to `parse` lines into.
    pub fn new(person: Person) -> Self {
        Self {
            steps: 0,
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
}

impl ActivityParser for StepsRecord {
    type Summary = StepsSummary;

    fn kind(&self) -> &'static str {
        "steps"
    }

    fn parse(&mut self, line: &str) -> Result<(), RecordError> {
        let fields = split_fields(line, FIELD_COUNT)?;

        let raw_steps = fields[0];
        if raw_steps.trim().is_empty() {
            return Err(RecordError::MalformedRecord(
                "step count must not be empty".to_string(),
            ));
        }
        if raw_steps.starts_with(' ') || raw_steps.ends_with(' ') {
            return Err(RecordError::MalformedRecord(
                "step count must not have leading or trailing spaces".to_string(),
            ));
        }
        let steps = parse_steps(raw_steps)?;
        let duration = parse_positive_duration(fields[1])?;

        debug!(steps, duration = %duration, "parsed steps record");
        self.steps = steps;
        self.duration = duration;
        Ok(())
    }

    fn summarize(&self) -> Result<StepsSummary, RecordError> {
        let Person { weight, height, .. } = self.person;
        let calories = walking_calories(self.steps, weight, height, self.duration)?;

        Ok(StepsSummary {
            steps: self.steps,
            distance_km: distance(self.steps, height),
            calories,
        })
    }
}
