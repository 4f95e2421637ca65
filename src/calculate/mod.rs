//! Physical metrics engine.
//!
//! Derives activity metrics from step counts and body measurements:
//! - Distance from steps and stride length
//! - Mean speed over the activity duration
//! - Calories burned while walking or running

use chrono::Duration;
use thiserror::Error;

use crate::duration::{duration_hours, duration_minutes};

/// Meters in a kilometer.
const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
const MIN_IN_H: f64 = 60.0;

/// Stride length as a fraction of body height.
const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

/// Walking burns half the running rate at the same speed.
const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Errors raised when physical inputs are out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("{field} must be greater than zero (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Check that every physical input of a calorie calculation is positive.
pub fn validate_inputs(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<(), MetricsError> {
    let checks = [
        ("steps", steps as f64, steps > 0),
        ("weight", weight, weight > 0.0),
        ("height", height, height > 0.0),
        ("duration", duration_hours(duration), duration > Duration::zero()),
    ];

    match checks.into_iter().find(|(_, _, ok)| !ok) {
        Some((field, value, _)) => Err(MetricsError::InvalidInput { field, value }),
        None => Ok(()),
    }
}

/// Distance in kilometers covered by `steps` at a stride derived from `height` (m).
pub fn distance(steps: i64, height: f64) -> f64 {
    let stride_length = height * STEP_LENGTH_COEFFICIENT;
    let distance = steps as f64 * stride_length;
    distance / M_IN_KM
}

/// Mean speed in km/h. Returns 0.0 when steps or duration are not positive.
pub fn mean_speed(steps: i64, height: f64, duration: Duration) -> f64 {
    if steps <= 0 || duration <= Duration::zero() {
        return 0.0;
    }
    distance(steps, height) / duration_hours(duration)
}

fn spent_calories(steps: i64, weight: f64, height: f64, duration: Duration) -> f64 {
    let average_speed = mean_speed(steps, height, duration);
    (weight * average_speed * duration_minutes(duration)) / MIN_IN_H
}

/// Calories burned walking.
pub fn walking_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, MetricsError> {
    validate_inputs(steps, weight, height, duration)?;
    Ok(spent_calories(steps, weight, height, duration) * WALKING_CALORIES_COEFFICIENT)
}

/// Calories burned running.
pub fn running_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, MetricsError> {
    validate_inputs(steps, weight, height, duration)?;
    Ok(spent_calories(steps, weight, height, duration))
}
