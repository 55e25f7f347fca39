//! Formatting options and configuration.

use std::str::FromStr;

use chrono_tz::Tz;

/// Display style for the date or time portion of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Omit this portion entirely.
    None,
    Full,
    Long,
    #[default]
    Medium,
    Short,
}

impl Style {
    /// The style names a host may expose for selection.
    ///
    /// Hosts without full internationalization support pass `restricted`
    /// to narrow the choices; this only narrows the UI surface, never the
    /// formatter's behavior.
    pub fn allowed(restricted: bool) -> &'static [&'static str] {
        if restricted {
            &["none", "short"]
        } else {
            &["none", "full", "long", "medium", "short"]
        }
    }
}

impl FromStr for Style {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Style::None),
            "full" => Ok(Style::Full),
            "long" => Ok(Style::Long),
            "medium" => Ok(Style::Medium),
            "short" => Ok(Style::Short),
            _ => Err(()),
        }
    }
}

/// Per-call options for range formatting.
///
/// This is a plain value object: the pattern mask cache is keyed by the
/// relevant fields, so reusing or rebuilding an options value between calls
/// can never leave stale derived state behind.
#[derive(Debug, Clone)]
pub struct RangeOptions {
    /// Style of the date portion.
    pub date_style: Style,
    /// Style of the time portion.
    pub time_style: Style,
    /// Text joining the differing middle portions of a range.
    pub range_separator: String,
    /// Text joining the date portion to the time portion.
    pub date_time_separator: String,
    /// Timezone used to resolve inputs that carry no offset of their own
    /// (Unix timestamps, naive date strings, "now").
    pub timezone: Tz,
}

impl Default for RangeOptions {
    fn default() -> Self {
        RangeOptions {
            date_style: Style::Medium,
            time_style: Style::None,
            range_separator: "–".to_string(),
            date_time_separator: ", ".to_string(),
            timezone: Tz::UTC,
        }
    }
}
