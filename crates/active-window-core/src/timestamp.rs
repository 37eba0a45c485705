//! Timestamp normalizer.
//!
//! Both dump formats store instants differently: the JSON buckets use
//! ISO-8601 strings that are already UTC wall-clock time, the CSV log uses
//! epoch seconds. Everything ends up as a [`DateTime<Utc>`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::TimestampError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Parse an ISO-8601 date-time, with or without a trailing `Z`, as UTC.
///
/// The value is taken as UTC wall-clock time. If it carries a numeric
/// offset the offset is dropped, not applied.
pub fn parse_iso8601(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = input.trim_end_matches('Z');

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            OFFSET_FORMATS.iter().find_map(|fmt| {
                DateTime::parse_from_str(trimmed, fmt)
                    .ok()
                    .map(|dt| dt.naive_local())
            })
        })
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| TimestampError::InvalidIso {
            input: input.to_string(),
        })?;

    Ok(naive.and_utc())
}

/// A raw epoch-seconds value as it appears in a dump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EpochSeconds<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
}

impl<'a> From<&'a str> for EpochSeconds<'a> {
    fn from(s: &'a str) -> Self {
        EpochSeconds::Text(s)
    }
}

impl From<i64> for EpochSeconds<'_> {
    fn from(s: i64) -> Self {
        EpochSeconds::Int(s)
    }
}

impl From<f64> for EpochSeconds<'_> {
    fn from(s: f64) -> Self {
        EpochSeconds::Float(s)
    }
}

/// Convert epoch seconds to a UTC instant, truncating any fractional part.
pub fn from_epoch_seconds<'a>(
    value: impl Into<EpochSeconds<'a>>,
) -> Result<DateTime<Utc>, TimestampError> {
    let seconds = match value.into() {
        EpochSeconds::Int(s) => s,
        EpochSeconds::Float(f) => truncate(f).ok_or_else(|| TimestampError::InvalidEpoch {
            input: f.to_string(),
        })?,
        EpochSeconds::Text(text) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(s) => s,
                Err(_) => text
                    .parse::<f64>()
                    .ok()
                    .and_then(truncate)
                    .ok_or_else(|| TimestampError::InvalidEpoch {
                        input: text.to_string(),
                    })?,
            }
        }
    };

    DateTime::from_timestamp(seconds, 0).ok_or(TimestampError::OutOfRange { seconds })
}

fn truncate(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}
