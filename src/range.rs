//! Range formatting orchestration.

use chrono::{DateTime, FixedOffset};

use crate::cache::MaskCache;
use crate::compare;
use crate::error::FormatError;
use crate::field::Granularity;
use crate::formatter::{BuiltinFormatter, PointFormatter};
use crate::mask::{PatternMask, PatternSegment};
use crate::options::{RangeOptions, Style};
use crate::separator;
use crate::tokenizer::{tokenize, TokenKind};
use crate::value::{prepare, DateInput};

/// Locale-aware date/time range formatter.
///
/// Both ends of the range are formatted independently through the point
/// formatter, tokenized along the display pattern's segment mask, and
/// stitched back together so that segments identical between the two are
/// emitted only once: shared prefix, differing middles joined by the range
/// separator, shared suffix.
pub struct Ranger {
    locale: String,
    formatter: Box<dyn PointFormatter>,
    cache: MaskCache,
}

impl Ranger {
    /// A ranger for `locale` backed by the built-in point formatter.
    pub fn new(locale: &str) -> Self {
        Self::with_formatter(locale, Box::new(BuiltinFormatter::new(locale)))
    }

    /// A ranger backed by a caller-supplied point formatter.
    pub fn with_formatter(locale: &str, formatter: Box<dyn PointFormatter>) -> Self {
        Ranger {
            locale: locale.to_string(),
            formatter,
            cache: MaskCache::new(),
        }
    }

    /// The locale identifier this ranger was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Format a single point: the degenerate range whose end equals its
    /// start.
    pub fn format_point<'a>(
        &self,
        value: impl Into<DateInput<'a>>,
        options: &RangeOptions,
    ) -> Result<String, FormatError> {
        let value = value.into();
        self.format(value.clone(), value, options)
    }

    /// Format the range between `start` and `end`.
    ///
    /// Equal inputs (down to the precision of the requested styles)
    /// produce a single point with no separator.
    pub fn format<'a>(
        &self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
        options: &RangeOptions,
    ) -> Result<String, FormatError> {
        let start = prepare(start.into(), options.timezone)?;
        let end = prepare(end.into(), options.timezone)?;

        if options.date_style == Style::None && options.time_style == Style::None {
            return Ok(String::new());
        }

        let mask = self.mask(options)?;
        let time_shown = options.time_style != Style::None;
        let split = compare::best_match(&start, &end, time_shown);

        let start_formatted = self.render(&start, options);
        let end_formatted = self.render(&end, options);
        let start_tokens = tokenize(&mask, &start_formatted);
        let end_tokens = tokenize(&mask, &end_formatted);
        let segments = mask.segments();

        // Shared prefix from the start point, stopping at the first
        // segment finer than the split.
        let mut left = String::new();
        let mut from = segments.len();
        for (idx, segment) in segments.iter().enumerate() {
            match segment {
                PatternSegment::Literal(text) => left.push_str(text),
                PatternSegment::Field(category) => {
                    if !split.shares(*category) {
                        from = idx;
                        break;
                    }
                    left.push_str(&start_tokens[idx].content);
                }
            }
        }

        // Identical down to the mask's precision: render a single point.
        if split >= Granularity::Field(mask.precision()) || from == segments.len() {
            return Ok(left);
        }

        // Shared suffix from the end point, walking back down to the last
        // segment finer than the split.
        let mut right = String::new();
        let mut to = from;
        for idx in (from..segments.len()).rev() {
            let token = &end_tokens[idx];
            match token.kind {
                TokenKind::Literal => right.insert_str(0, &token.content),
                TokenKind::Field(category) => {
                    if !split.shares(category) {
                        to = idx;
                        break;
                    }
                    right.insert_str(0, &token.content);
                }
            }
        }

        let mut left_middle = String::new();
        let mut right_middle = String::new();
        for idx in from..=to {
            left_middle.push_str(&start_tokens[idx].content);
            right_middle.push_str(&end_tokens[idx].content);
        }

        let joiner = separator::resolve(&self.locale, split, &options.range_separator);
        Ok(format!("{left}{left_middle}{joiner}{right_middle}{right}"))
    }

    /// Build or reuse the segment mask for the requested styles.
    fn mask(&self, options: &RangeOptions) -> Result<PatternMask, FormatError> {
        let key = (
            options.date_style,
            options.time_style,
            options.date_time_separator.clone(),
        );
        self.cache
            .get_or_build(key, || PatternMask::parse(&self.combined_pattern(options)))
            .map_err(FormatError::from)
    }

    /// The raw pattern covering both requested portions, with the
    /// date-time separator spliced in as an escaped literal.
    fn combined_pattern(&self, options: &RangeOptions) -> String {
        let date = self.formatter.date_pattern(options.date_style);
        let time = self.formatter.time_pattern(options.time_style);
        if options.date_style == Style::None {
            return time;
        }
        if options.time_style == Style::None {
            return date;
        }
        format!("{date}'{}'{time}", options.date_time_separator)
    }

    /// Format one point exactly the way the combined pattern reads.
    fn render(&self, point: &DateTime<FixedOffset>, options: &RangeOptions) -> String {
        let date = self.formatter.format_date(point, options.date_style);
        let time = self.formatter.format_time(point, options.time_style);
        if options.date_style == Style::None {
            return time;
        }
        if options.time_style == Style::None {
            return date;
        }
        format!("{date}{}{time}", options.date_time_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    /// A fixed-pattern formatter, exercising the injected boundary.
    struct IsoFormatter;

    impl PointFormatter for IsoFormatter {
        fn date_pattern(&self, style: Style) -> String {
            match style {
                Style::None => String::new(),
                _ => "y-MM-dd".to_string(),
            }
        }

        fn time_pattern(&self, style: Style) -> String {
            match style {
                Style::None => String::new(),
                _ => "HH:mm".to_string(),
            }
        }

        fn format_date(&self, point: &DateTime<FixedOffset>, style: Style) -> String {
            match style {
                Style::None => String::new(),
                _ => format!("{:04}-{:02}-{:02}", point.year(), point.month(), point.day()),
            }
        }

        fn format_time(&self, point: &DateTime<FixedOffset>, style: Style) -> String {
            match style {
                Style::None => String::new(),
                _ => format!("{:02}:{:02}", point.hour(), point.minute()),
            }
        }
    }

    #[test]
    fn test_injected_formatter() {
        let ranger = Ranger::with_formatter("en", Box::new(IsoFormatter));
        let options = RangeOptions::default();

        let out = ranger
            .format("2020-01-03", "2020-01-05", &options)
            .unwrap();
        assert_eq!(out, "2020-01-03–05");
    }

    #[test]
    fn test_injected_formatter_single_point() {
        let ranger = Ranger::with_formatter("en", Box::new(IsoFormatter));
        let options = RangeOptions::default();

        let out = ranger
            .format("2020-01-03", "2020-01-03", &options)
            .unwrap();
        assert_eq!(out, "2020-01-03");
    }
}
