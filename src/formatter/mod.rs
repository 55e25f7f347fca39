//! The locale point-formatting boundary.

mod pattern;

use chrono::{DateTime, FixedOffset};

use crate::locale::Locale;
use crate::options::Style;

/// Locale-aware formatter for a single point in time.
///
/// The range formatter consumes this as an injected capability: it asks for
/// the raw pattern behind a style when building the segment mask, and for
/// the rendering of a concrete point when tokenizing. Both must come from
/// the same pattern source or tokenization will not line up.
pub trait PointFormatter: Send + Sync {
    /// Raw pattern for the date portion; empty when the style is `None`.
    fn date_pattern(&self, style: Style) -> String;

    /// Raw pattern for the time portion; empty when the style is `None`.
    fn time_pattern(&self, style: Style) -> String;

    /// Format the date portion of a point.
    fn format_date(&self, point: &DateTime<FixedOffset>, style: Style) -> String;

    /// Format the time portion of a point.
    fn format_time(&self, point: &DateTime<FixedOffset>, style: Style) -> String;
}

/// [`PointFormatter`] backed by the built-in locale tables.
#[derive(Debug)]
pub struct BuiltinFormatter {
    locale: &'static Locale,
}

impl BuiltinFormatter {
    pub fn new(locale: &str) -> Self {
        BuiltinFormatter {
            locale: Locale::for_language(locale),
        }
    }
}

impl PointFormatter for BuiltinFormatter {
    fn date_pattern(&self, style: Style) -> String {
        self.locale.date_pattern(style).to_string()
    }

    fn time_pattern(&self, style: Style) -> String {
        self.locale.time_pattern(style).to_string()
    }

    fn format_date(&self, point: &DateTime<FixedOffset>, style: Style) -> String {
        pattern::render(point, self.locale.date_pattern(style), self.locale)
    }

    fn format_time(&self, point: &DateTime<FixedOffset>, style: Style) -> String {
        pattern::render(point, self.locale.time_pattern(style), self.locale)
    }
}
