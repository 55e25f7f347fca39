//! rangefmt - locale-aware date/time range formatting
//!
//! Formats the interval between two points in time as the shortest
//! locale-correct string by collapsing the portions that are identical
//! between start and end: "Jan 3–5, 2020" rather than
//! "Jan 3, 2020 – Jan 5, 2020".
//!
//! The built-in point formatter ships pattern data for a handful of
//! locales; richer locale data sources plug in through [`PointFormatter`].

pub mod compare;
pub mod error;
pub mod field;
pub mod mask;
pub mod options;
pub mod separator;
pub mod tokenizer;
pub mod value;

mod cache;
mod formatter;
mod locale;
mod range;

pub use error::{FormatError, PatternError};
pub use field::{classify, FieldCategory, Granularity};
pub use formatter::{BuiltinFormatter, PointFormatter};
pub use locale::Locale;
pub use mask::{PatternMask, PatternSegment};
pub use options::{RangeOptions, Style};
pub use range::Ranger;
pub use separator::{DefaultResolver, SeparatorResolver};
pub use tokenizer::{tokenize, Token, TokenKind};
pub use value::DateInput;

/// Format a range with string style names and defaults for everything
/// else. Unrecognized style names fall back to the medium style.
pub fn format_range<'a>(
    start: impl Into<DateInput<'a>>,
    end: impl Into<DateInput<'a>>,
    date_style: &str,
    time_style: &str,
    locale: &str,
) -> Result<String, FormatError> {
    let options = RangeOptions {
        date_style: date_style.parse().unwrap_or_default(),
        time_style: time_style.parse().unwrap_or_default(),
        ..RangeOptions::default()
    };
    Ranger::new(locale).format(start, end, &options)
}

/// Format a single point in time: the template-filter entry point.
pub fn format_point<'a>(
    value: impl Into<DateInput<'a>>,
    date_style: &str,
    time_style: &str,
    locale: &str,
) -> Result<String, FormatError> {
    let options = RangeOptions {
        date_style: date_style.parse().unwrap_or_default(),
        time_style: time_style.parse().unwrap_or_default(),
        ..RangeOptions::default()
    };
    Ranger::new(locale).format_point(value, &options)
}
