use rangefmt::{FieldCategory, PatternError, PatternMask, PatternSegment};

#[test]
fn test_medium_date_pattern() {
    let mask = PatternMask::parse("MMM d, y").unwrap();
    assert_eq!(
        mask.segments(),
        &[
            PatternSegment::Field(FieldCategory::Month),
            PatternSegment::Literal(" ".to_string()),
            PatternSegment::Field(FieldCategory::Day),
            PatternSegment::Literal(", ".to_string()),
            PatternSegment::Field(FieldCategory::Year),
        ]
    );
    assert_eq!(mask.precision(), FieldCategory::Day);
}

#[test]
fn test_combined_pattern_with_escaped_separator() {
    let mask = PatternMask::parse("MMM d, y', 'h:mm a").unwrap();
    assert_eq!(
        mask.segments(),
        &[
            PatternSegment::Field(FieldCategory::Month),
            PatternSegment::Literal(" ".to_string()),
            PatternSegment::Field(FieldCategory::Day),
            PatternSegment::Literal(", ".to_string()),
            PatternSegment::Field(FieldCategory::Year),
            PatternSegment::Literal(", ".to_string()),
            PatternSegment::Field(FieldCategory::Hour),
            PatternSegment::Literal(":".to_string()),
            PatternSegment::Field(FieldCategory::Minute),
            PatternSegment::Literal(" ".to_string()),
            PatternSegment::Field(FieldCategory::AmPm),
        ]
    );
    assert_eq!(mask.precision(), FieldCategory::Minute);
}

#[test]
fn test_quoted_words_are_separate_literals() {
    let mask = PatternMask::parse("d 'de' MMMM").unwrap();
    assert_eq!(
        mask.segments(),
        &[
            PatternSegment::Field(FieldCategory::Day),
            PatternSegment::Literal(" ".to_string()),
            PatternSegment::Literal("de".to_string()),
            PatternSegment::Literal(" ".to_string()),
            PatternSegment::Field(FieldCategory::Month),
        ]
    );
}

#[test]
fn test_lone_escape_pair() {
    let mask = PatternMask::parse("h'' a").unwrap();
    assert!(mask
        .segments()
        .contains(&PatternSegment::Literal("'".to_string())));
}

#[test]
fn test_timezone_does_not_raise_precision() {
    let mask = PatternMask::parse("h:mm a z").unwrap();
    assert_eq!(mask.precision(), FieldCategory::Minute);
}

#[test]
fn test_missing_separator_between_fields() {
    let err = PatternMask::parse("yyyyMM").unwrap_err();
    assert_eq!(err, PatternError::MissingSeparator { position: 4 });
}

#[test]
fn test_same_category_letters_merge() {
    // y and Y are both year fields; a run of either is one segment.
    let mask = PatternMask::parse("yyY").unwrap();
    assert_eq!(
        mask.segments(),
        &[PatternSegment::Field(FieldCategory::Year)]
    );
}

#[test]
fn test_unterminated_escape() {
    let err = PatternMask::parse("h 'oops").unwrap_err();
    assert_eq!(err, PatternError::UnterminatedEscape { position: 2 });
}

#[test]
fn test_empty_pattern() {
    let mask = PatternMask::parse("").unwrap();
    assert!(mask.is_empty());
}
