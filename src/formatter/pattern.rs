//! Pattern-driven rendering of a single point in time.
//!
//! Interprets ICU/CLDR date/time patterns directly against chrono's
//! calendar accessors. Pattern syntax follows Unicode TS #35; only the
//! symbols that occur in real CLDR style patterns are supported, and
//! timezone symbols render as localized-GMT text since a fixed offset has
//! no display name of its own.

use std::iter::Peekable;
use std::str::Chars;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::locale::Locale;

/// Render a point according to a raw pattern, drawing names from `locale`.
pub(crate) fn render(point: &DateTime<FixedOffset>, pattern: &str, locale: &Locale) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    for lit in chars.by_ref() {
                        if lit == '\'' {
                            break;
                        }
                        out.push(lit);
                    }
                }
            }
            'y' | 'Y' | 'u' | 'U' | 'r' => {
                let count = 1 + consume_same(&mut chars, c);
                push_year(&mut out, point.year(), count);
            }
            'G' => {
                consume_same(&mut chars, c);
                let era = if point.year() <= 0 {
                    locale.eras[0]
                } else {
                    locale.eras[1]
                };
                out.push_str(era);
            }
            'Q' | 'q' => {
                let count = 1 + consume_same(&mut chars, c);
                let quarter = point.month0() / 3 + 1;
                if count >= 3 {
                    out.push('Q');
                    out.push_str(&quarter.to_string());
                } else {
                    push_padded(&mut out, quarter, count);
                }
            }
            'M' | 'L' => {
                let count = 1 + consume_same(&mut chars, c);
                let index = point.month0() as usize;
                match count {
                    1 => out.push_str(&point.month().to_string()),
                    2 => push_padded(&mut out, point.month(), 2),
                    3 => out.push_str(locale.months_abbreviated[index]),
                    4 => out.push_str(locale.months_wide[index]),
                    _ => {
                        if let Some(narrow) = locale.months_wide[index].chars().next() {
                            out.push(narrow);
                        }
                    }
                }
            }
            'w' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, point.iso_week().week(), count);
            }
            'W' | 'F' => {
                consume_same(&mut chars, c);
                out.push_str(&((point.day() - 1) / 7 + 1).to_string());
            }
            'd' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, point.day(), count);
            }
            'D' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, point.ordinal(), count);
            }
            'E' | 'e' | 'c' => {
                let count = 1 + consume_same(&mut chars, c);
                let index = point.weekday().num_days_from_sunday() as usize;
                if count >= 4 {
                    out.push_str(locale.days_wide[index]);
                } else {
                    out.push_str(locale.days_abbreviated[index]);
                }
            }
            'a' => {
                consume_same(&mut chars, c);
                out.push_str(if point.hour() < 12 { locale.am } else { locale.pm });
            }
            'h' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, (point.hour() + 11) % 12 + 1, count);
            }
            'K' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, point.hour() % 12, count);
            }
            'H' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, point.hour(), count);
            }
            'k' => {
                let count = 1 + consume_same(&mut chars, c);
                let hour = if point.hour() == 0 { 24 } else { point.hour() };
                push_padded(&mut out, hour, count);
            }
            'm' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, point.minute(), count);
            }
            's' => {
                let count = 1 + consume_same(&mut chars, c);
                push_padded(&mut out, point.second(), count);
            }
            'S' => {
                let count = 1 + consume_same(&mut chars, c);
                let millis = (point.nanosecond() / 1_000_000).min(999);
                let digits = format!("{millis:03}");
                for i in 0..count {
                    out.push(digits.chars().nth(i).unwrap_or('0'));
                }
            }
            'z' | 'v' | 'V' | 'O' => {
                let count = 1 + consume_same(&mut chars, c);
                out.push_str(&gmt_offset(point, count >= 4));
            }
            'Z' => {
                let count = 1 + consume_same(&mut chars, c);
                match count {
                    4 => out.push_str(&gmt_offset(point, true)),
                    5 => out.push_str(&iso_offset(point, true, false)),
                    _ => out.push_str(&iso_offset(point, false, false)),
                }
            }
            'X' | 'x' => {
                let count = 1 + consume_same(&mut chars, c);
                if c == 'X' && point.offset().local_minus_utc() == 0 {
                    out.push('Z');
                } else {
                    match count {
                        1 => out.push_str(&iso_offset(point, false, true)),
                        2 | 4 => out.push_str(&iso_offset(point, false, false)),
                        _ => out.push_str(&iso_offset(point, true, false)),
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn consume_same(chars: &mut Peekable<Chars>, c: char) -> usize {
    let mut count = 0;
    while chars.peek() == Some(&c) {
        chars.next();
        count += 1;
    }
    count
}

fn push_padded(out: &mut String, value: u32, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

fn push_year(out: &mut String, year: i32, count: usize) {
    if count == 2 {
        out.push_str(&format!("{:02}", year.rem_euclid(100)));
    } else {
        out.push_str(&format!("{year:0count$}"));
    }
}

/// Localized-GMT rendering: `GMT+01:00` (long) or `GMT+1` (short).
fn gmt_offset(point: &DateTime<FixedOffset>, long: bool) -> String {
    let seconds = point.offset().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / 3600;
    let minutes = seconds.abs() % 3600 / 60;
    if long {
        format!("GMT{sign}{hours:02}:{minutes:02}")
    } else if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}

fn iso_offset(point: &DateTime<FixedOffset>, colon: bool, hours_only: bool) -> String {
    let seconds = point.offset().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / 3600;
    let minutes = seconds.abs() % 3600 / 60;
    if hours_only && minutes == 0 {
        format!("{sign}{hours:02}")
    } else if colon {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}")
    }
}
