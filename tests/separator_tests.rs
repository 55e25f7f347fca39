//! Separator resolution: default behavior and per-language overrides.

use std::sync::Arc;

use rangefmt::separator::{self, SeparatorResolver};
use rangefmt::{FieldCategory, Granularity, RangeOptions, Ranger};

#[test]
fn test_default_spacing_follows_split_width() {
    let ranger = Ranger::new("en");
    let opts = RangeOptions::default();

    // Day-level split: separator as configured.
    assert_eq!(
        ranger.format("2020-01-03", "2020-01-05", &opts).unwrap(),
        "Jan 3–5, 2020"
    );
    // Coarser splits get the separator padded with spaces.
    assert_eq!(
        ranger.format("2020-01-03", "2020-02-05", &opts).unwrap(),
        "Jan 3 – Feb 5, 2020"
    );
}

/// German abbreviated-ordinal typography: a day-level range repeats the
/// trailing dot before the dash, "03.–05.01.2020".
struct GermanResolver;

impl SeparatorResolver for GermanResolver {
    fn resolve(&self, _locale: &str, split: Granularity, separator: &str) -> String {
        match split {
            Granularity::Field(FieldCategory::Month) => format!(".{separator}"),
            s if s < Granularity::Field(FieldCategory::Month) => {
                format!(" {} ", separator.trim())
            }
            _ => separator.to_string(),
        }
    }
}

#[test]
fn test_registered_resolver_overrides_default() {
    separator::register("de", Arc::new(GermanResolver));

    let ranger = Ranger::new("de");
    let out = ranger
        .format("2020-01-03", "2020-01-05", &RangeOptions::default())
        .unwrap();
    assert_eq!(out, "03.–05.01.2020");
}

#[test]
fn test_registration_covers_region_variants() {
    separator::register("de", Arc::new(GermanResolver));

    let ranger = Ranger::new("de-AT");
    let out = ranger
        .format("2013-09-18", "2013-09-20", &RangeOptions::default())
        .unwrap();
    assert_eq!(out, "18.–20.09.2013");
}

#[test]
fn test_unregistered_language_uses_default() {
    let ranger = Ranger::new("it");
    let out = ranger
        .format("2020-01-03", "2020-02-05", &RangeOptions::default())
        .unwrap();
    assert_eq!(out, "3 gen – 5 feb 2020");
}
