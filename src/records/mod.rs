//! Activity record parsing.
//!
//! Raw input lines are comma-separated with no escaping:
//! - day steps: `<steps>,<duration>` (always walking)
//! - training: `<steps>,<activity>,<duration>`
//!
//! All record types implement the `ActivityParser` trait, which is what the
//! batch ingestion loop drives.

mod steps;
mod training;

pub use steps::StepsRecord;
pub use training::TrainingRecord;

use chrono::Duration;
use serde::Serialize;
use thiserror::Error;

use crate::calculate::MetricsError;
use crate::duration::{parse_duration, DurationError};

/// Errors that can occur while parsing or describing a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("invalid duration: {0}")]
    InvalidDuration(#[from] DurationError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] MetricsError),

    #[error("unknown activity type: {0:?}")]
    UnknownActivity(String),
}

/// Core trait for all activity records.
pub trait ActivityParser {
    /// Computed metrics for the current record.
    type Summary: Serialize + std::fmt::Display;

    /// Record kind identifier for logging.
    fn kind(&self) -> &'static str;

    /// Replace the record's contents with the values parsed from `line`.
    /// On error the record is left unchanged.
    fn parse(&mut self, line: &str) -> Result<(), RecordError>;

    /// Compute the metrics for the current record.
    fn summarize(&self) -> Result<Self::Summary, RecordError>;

    /// Human-readable summary of the current record.
    fn describe(&self) -> Result<String, RecordError> {
        self.summarize().map(|summary| summary.to_string())
    }
}

/// Split `line` on commas, requiring exactly `expected` fields.
fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(RecordError::MalformedRecord(format!(
            "expected {} fields, got {}",
            expected,
            fields.len()
        )));
    }
    Ok(fields)
}

/// Parse a positive step count. Surrounding whitespace is trimmed.
fn parse_steps(field: &str) -> Result<i64, RecordError> {
    let trimmed = field.trim();
    let steps: i64 = trimmed.parse().map_err(|_| {
        RecordError::MalformedRecord(format!("invalid step count {:?}", trimmed))
    })?;

    if steps <= 0 {
        return Err(RecordError::MalformedRecord(format!(
            "step count must be greater than zero (got {})",
            steps
        )));
    }
    Ok(steps)
}

/// Parse a strictly positive duration. Surrounding whitespace is trimmed.
fn parse_positive_duration(field: &str) -> Result<Duration, RecordError> {
    let duration = parse_duration(field.trim())?;
    if duration <= Duration::zero() {
        return Err(RecordError::MalformedRecord(format!(
            "duration must be greater than zero (got {:?})",
            field.trim()
        )));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("a,b", 2).unwrap(), vec!["a", "b"]);
        assert_eq!(split_fields(",", 2).unwrap(), vec!["", ""]);
        assert!(split_fields("a", 2).is_err());
        assert!(split_fields("a,b,c", 2).is_err());
        assert!(split_fields("", 2).is_err());
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!(parse_steps("678"), Ok(678));
        assert_eq!(parse_steps("+12345"), Ok(12345));
        assert_eq!(parse_steps(" 42 "), Ok(42));
        assert!(parse_steps("0").is_err());
        assert!(parse_steps("-100").is_err());
        assert!(parse_steps("+").is_err());
        assert!(parse_steps("-").is_err());
        assert!(parse_steps("123abc").is_err());
        assert!(parse_steps("").is_err());
    }

    #[test]
    fn test_parse_positive_duration() {
        assert_eq!(parse_positive_duration(" 1h30m "), Ok(Duration::minutes(90)));
        assert!(matches!(
            parse_positive_duration("0h0m"),
            Err(RecordError::MalformedRecord(_))
        ));
        assert!(matches!(
            parse_positive_duration("-1h30m"),
            Err(RecordError::MalformedRecord(_))
        ));
        assert!(matches!(
            parse_positive_duration("1.5d"),
            Err(RecordError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError::UnknownActivity("Swimming".to_string());
        assert_eq!(err.to_string(), "unknown activity type: \"Swimming\"");

        let err = RecordError::from(DurationError::Empty);
        assert_eq!(err.to_string(), "invalid duration: empty duration");
    }
}
