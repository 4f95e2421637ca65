//! Compound duration parsing.
//!
//! Accepts one or more `<number><unit>` components written back to back,
//! e.g. `"1h30m"`, `"1.5h"`, `"30.5m"`, `"45s"`. Units are `h`, `m` and `s`.
//! A single leading sign is allowed; anything else that is not a digit,
//! a decimal point or a known unit is rejected, including whitespace.

use chrono::Duration;
use thiserror::Error;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// Errors produced while parsing a duration string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("missing number in duration {0:?}")]
    MissingNumber(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<i64> {
    match unit {
        "h" => Some(NANOS_PER_HOUR),
        "m" => Some(NANOS_PER_MINUTE),
        "s" => Some(NANOS_PER_SECOND),
        _ => None,
    }
}

/// Split the leading run of bytes matching `pred` off `s`.
fn take_while(s: &str, pred: impl Fn(u8) -> bool) -> (&str, &str) {
    let end = s.bytes().position(|b| !pred(b)).unwrap_or(s.len());
    s.split_at(end)
}

/// Parse a compound duration string (e.g. "1h30m", "1.5h", "30.5m").
///
/// The sign, if any, applies to the whole value, so `"-1h30m"` parses to a
/// negative duration. A sign inside a later component is read as part of
/// the preceding unit and rejected. A bare number without a unit fails.
pub fn parse_duration(s: &str) -> Result<Duration, DurationError> {
    if s.is_empty() {
        return Err(DurationError::Empty);
    }

    let (negative, mut rest) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if rest.is_empty() {
        return Err(DurationError::MissingNumber(s.to_string()));
    }

    let overflow = || DurationError::Overflow(s.to_string());
    let mut total: i64 = 0;

    while !rest.is_empty() {
        let (int_digits, after_int) = take_while(rest, |b| b.is_ascii_digit());
        rest = after_int;

        let mut whole: i64 = 0;
        for b in int_digits.bytes() {
            whole = whole
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(b - b'0')))
                .ok_or_else(overflow)?;
        }

        // Fractional digits past f64 precision are dropped.
        let mut frac: i64 = 0;
        let mut scale: f64 = 1.0;
        let mut frac_digits = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_frac) = take_while(after_dot, |b| b.is_ascii_digit());
            frac_digits = digits;
            rest = after_frac;
            let mut saturated = false;
            for b in digits.bytes() {
                if saturated {
                    continue;
                }
                match frac.checked_mul(10).and_then(|v| v.checked_add(i64::from(b - b'0'))) {
                    Some(v) => {
                        frac = v;
                        scale *= 10.0;
                    }
                    None => saturated = true,
                }
            }
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationError::MissingNumber(s.to_string()));
        }

        let (unit, after_unit) = take_while(rest, |b| b != b'.' && !b.is_ascii_digit());
        rest = after_unit;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(s.to_string()));
        }
        let nanos = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: s.to_string(),
        })?;

        let mut component = whole.checked_mul(nanos).ok_or_else(overflow)?;
        if frac > 0 {
            let frac_nanos = (frac as f64 * (nanos as f64 / scale)) as i64;
            component = component.checked_add(frac_nanos).ok_or_else(overflow)?;
        }
        total = total.checked_add(component).ok_or_else(overflow)?;
    }

    if negative {
        total = -total;
    }
    Ok(Duration::nanoseconds(total))
}

fn split_nanos(duration: Duration, unit: i64) -> f64 {
    match duration.num_nanoseconds() {
        Some(ns) => (ns / unit) as f64 + (ns % unit) as f64 / unit as f64,
        None => duration.num_seconds() as f64 / (unit / NANOS_PER_SECOND) as f64,
    }
}

/// Duration as fractional hours.
pub fn duration_hours(duration: Duration) -> f64 {
    split_nanos(duration, NANOS_PER_HOUR)
}

/// Duration as fractional minutes.
pub fn duration_minutes(duration: Duration) -> f64 {
    split_nanos(duration, NANOS_PER_MINUTE)
}
