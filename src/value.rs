//! Input values that can bound a range.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::FormatError;

/// A value accepted as the start or end of a range.
///
/// Conversion to a concrete point happens once at the boundary; anything
/// unrecognized fails with [`FormatError::InvalidInput`].
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput<'a> {
    /// A Unix timestamp in seconds.
    Timestamp(i64),
    /// An ISO 8601 date or date/time string, with or without an offset.
    Iso(&'a str),
    /// An already-resolved point in time.
    DateTime(DateTime<FixedOffset>),
    /// The current instant.
    Now,
}

impl<'a> From<i64> for DateInput<'a> {
    fn from(seconds: i64) -> Self {
        DateInput::Timestamp(seconds)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Iso(text)
    }
}

impl<'a> From<DateTime<FixedOffset>> for DateInput<'a> {
    fn from(point: DateTime<FixedOffset>) -> Self {
        DateInput::DateTime(point)
    }
}

impl<'a> From<DateTime<Utc>> for DateInput<'a> {
    fn from(point: DateTime<Utc>) -> Self {
        DateInput::DateTime(point.fixed_offset())
    }
}

impl<'a> From<DateTime<Tz>> for DateInput<'a> {
    fn from(point: DateTime<Tz>) -> Self {
        DateInput::DateTime(point.fixed_offset())
    }
}

impl<'a> From<()> for DateInput<'a> {
    fn from(_: ()) -> Self {
        DateInput::Now
    }
}

/// Resolve an input to a concrete point carrying its own UTC offset.
///
/// Inputs without an offset of their own (timestamps, naive strings, `Now`)
/// are resolved in `tz`. An ambiguous local time takes the earlier instant;
/// a time inside a spring-forward gap does not exist and is rejected.
pub(crate) fn prepare(input: DateInput<'_>, tz: Tz) -> Result<DateTime<FixedOffset>, FormatError> {
    match input {
        DateInput::Timestamp(seconds) => tz
            .timestamp_opt(seconds, 0)
            .single()
            .map(|point| point.fixed_offset())
            .ok_or(FormatError::TimestampOutOfRange { seconds }),
        DateInput::Iso(text) => parse_iso(text, tz),
        DateInput::DateTime(point) => Ok(point),
        DateInput::Now => Ok(Utc::now().with_timezone(&tz).fixed_offset()),
    }
}

fn parse_iso(text: &str, tz: Tz) -> Result<DateTime<FixedOffset>, FormatError> {
    if let Ok(point) = DateTime::parse_from_rfc3339(text) {
        return Ok(point);
    }

    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
        })
        .map_err(|_| FormatError::InvalidInput {
            input: text.to_string(),
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|point| point.fixed_offset())
        .ok_or_else(|| FormatError::InvalidInput {
            input: text.to_string(),
        })
}
