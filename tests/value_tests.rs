use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rangefmt::{DateInput, FormatError, RangeOptions, Ranger};

#[test]
fn test_timestamp_inputs() {
    let ranger = Ranger::new("en");
    let out = ranger
        .format(0i64, 86_400i64, &RangeOptions::default())
        .unwrap();
    assert_eq!(out, "Jan 1–2, 1970");
}

#[test]
fn test_timestamp_resolves_in_request_timezone() {
    // Midnight UTC is still the previous evening in New York.
    let ranger = Ranger::new("en");
    let opts = RangeOptions {
        timezone: Tz::America__New_York,
        ..RangeOptions::default()
    };
    let out = ranger.format(0i64, 0i64, &opts).unwrap();
    assert_eq!(out, "Dec 31, 1969");
}

#[test]
fn test_structured_inputs() {
    let ranger = Ranger::new("en");
    let start = Utc.with_ymd_and_hms(2020, 1, 3, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 1, 5, 0, 0, 0).unwrap();
    let out = ranger.format(start, end, &RangeOptions::default()).unwrap();
    assert_eq!(out, "Jan 3–5, 2020");
}

#[test]
fn test_fixed_offset_inputs() {
    let ranger = Ranger::new("en");
    let start = DateTime::parse_from_rfc3339("2020-01-03T09:00:00+01:00").unwrap();
    let out = ranger.format(start, start, &RangeOptions::default()).unwrap();
    assert_eq!(out, "Jan 3, 2020");
}

#[test]
fn test_string_forms() {
    let ranger = Ranger::new("en");
    let opts = RangeOptions::default();
    for input in [
        "2020-01-03",
        "2020-01-03T00:00:00",
        "2020-01-03 00:00:00",
        "2020-01-03T00:00",
        "2020-01-03T00:00:00Z",
    ] {
        assert_eq!(
            ranger.format(input, input, &opts).unwrap(),
            "Jan 3, 2020",
            "input {input:?}"
        );
    }
}

#[test]
fn test_now_conversion() {
    assert_eq!(DateInput::from(()), DateInput::Now);
}

#[test]
fn test_unrecognized_input() {
    let ranger = Ranger::new("en");
    let err = ranger
        .format("next tuesday", "2020-01-05", &RangeOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidInput {
            input: "next tuesday".to_string()
        }
    );
}

#[test]
fn test_out_of_range_timestamp() {
    let ranger = Ranger::new("en");
    let err = ranger
        .format(i64::MAX, i64::MAX, &RangeOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::TimestampOutOfRange { seconds: i64::MAX }
    );
}
