//! Parsing of time-of-day strings such as working-hour bounds (`"09:30"`).

use chrono::{NaiveTime, Timelike};
use tracing::warn;

use crate::error::CadenceError;

const FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parses `HH:MM` or `HH:MM:SS` (24h clock). Surrounding whitespace is ignored.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, CadenceError> {
    let trimmed = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            CadenceError::ParseError(format!(
                "invalid time of day '{}', expected HH:MM or HH:MM:SS",
                value
            ))
        })
}

/// Minutes elapsed since midnight for a time-of-day string. Seconds are dropped.
pub fn minutes_since_midnight(value: &str) -> Result<u32, CadenceError> {
    let time = parse_time_of_day(value)?;
    Ok(time.hour() * 60 + time.minute())
}

/// Lenient variant for optional settings: absent or malformed values yield `fallback`.
pub fn parse_time_or(value: Option<&str>, fallback: NaiveTime) -> NaiveTime {
    match value {
        Some(raw) => parse_time_of_day(raw).unwrap_or_else(|err| {
            warn!("{}; falling back to {}", err, fallback);
            fallback
        }),
        None => fallback,
    }
}
