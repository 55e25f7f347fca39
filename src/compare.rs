//! Finding the coarsest granularity at which two points diverge.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::field::{FieldCategory, Granularity};

/// Compare two points field by field, coarsest first, and return the
/// granularity above which output can be shared.
///
/// Minute- and second-only differences split at the am/pm level rather than
/// at the hour: truncated ranges like "10:00:00–30:00" are worse than
/// repeating the hour. A year difference expands maximally.
///
/// Two guards follow the field comparison. If the points carry different
/// UTC offsets, the nominal wall-clock comparison spans a daylight-saving
/// or zone change and nothing may be shared. Likewise, when a time style is
/// shown, dates that differ at day level or coarser are never collapsed.
pub fn best_match(
    start: &DateTime<FixedOffset>,
    end: &DateTime<FixedOffset>,
    time_shown: bool,
) -> Granularity {
    use FieldCategory::*;

    let best = if start.year() != end.year() {
        Granularity::Field(Timezone)
    } else if start.month() != end.month() {
        Granularity::Field(Year)
    } else if start.day() != end.day() {
        Granularity::Field(Month)
    } else if (start.hour() < 12) != (end.hour() < 12) {
        Granularity::Field(Day)
    } else if start.hour() != end.hour() {
        Granularity::Field(AmPm)
    } else if start.minute() != end.minute() {
        Granularity::Field(AmPm)
    } else if start.second() != end.second() {
        Granularity::Field(AmPm)
    } else {
        Granularity::Field(Second)
    };

    if start.offset() != end.offset()
        || (time_shown && best < Granularity::Field(Day))
    {
        return Granularity::Expand;
    }
    best
}
