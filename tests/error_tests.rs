//! Tests for error reporting.

use fmtcache::{
    DateParseError, Error, FormatterCache, FormatterOptions, PatternError, Zone,
};

#[test]
fn test_pattern_error_messages() {
    assert_eq!(PatternError::EmptyPattern.to_string(), "empty date pattern");
    assert_eq!(
        PatternError::UnterminatedQuote { position: 4 }.to_string(),
        "unterminated quote at position 4"
    );
    assert_eq!(
        PatternError::UnknownField {
            position: 11,
            letter: 'Q'
        }
        .to_string(),
        "unknown field letter 'Q' at position 11"
    );
    assert_eq!(
        PatternError::FieldTooWide {
            position: 3,
            letter: 'S',
            max: 9
        }
        .to_string(),
        "field 'S' at position 3 is too wide (maximum 9)"
    );
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        DateParseError::InvalidDate {
            year: 2020,
            month: 2,
            day: 30
        }
        .to_string(),
        "invalid date: 2020-02-30"
    );
    assert_eq!(
        DateParseError::InvalidTime {
            hour: 23,
            minute: 61,
            second: 0
        }
        .to_string(),
        "invalid time: 23:61:00"
    );
    assert_eq!(
        DateParseError::InvalidNumber {
            position: 5,
            field: "month"
        }
        .to_string(),
        "invalid month at position 5"
    );
    assert_eq!(
        DateParseError::UnexpectedEnd {
            position: 7,
            expected: "literal text"
        }
        .to_string(),
        "unexpected end of input at position 7: expected literal text"
    );
}

#[test]
fn test_top_level_error_wraps_both_kinds() {
    let cache = FormatterCache::new(FormatterOptions::default().with_time_zone(Zone::Utc));

    let err = fmtcache::parse(&cache, "2020", "yyyy Q").unwrap_err();
    assert!(matches!(err, Error::Pattern(PatternError::UnknownField { .. })));
    assert_eq!(err.to_string(), "unknown field letter 'Q' at position 5");

    let err = fmtcache::parse(&cache, "2020-1", "yyyy-MM-dd").unwrap_err();
    assert!(matches!(err, Error::Parse(DateParseError::UnexpectedEnd { .. })));
}

#[test]
fn test_rejected_pattern_is_not_cached() {
    let cache = FormatterCache::default();
    assert!(cache.formatter_for("'open").is_err());
    assert_eq!(cache.size(), 0);
    assert!(!cache.contains("'open"));
}
