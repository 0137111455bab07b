//! Tests for the crate-level format/parse helpers.

use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc};
use fmtcache::dates::{month_name, weekday_name};
use fmtcache::{FormatterCache, FormatterOptions, Locale, Zone};

fn cache() -> FormatterCache {
    FormatterCache::new(FormatterOptions::default().with_time_zone(Zone::Utc))
}

#[test]
fn test_format_then_parse_reuses_formatter() {
    let cache = cache();
    let instant = Utc.with_ymd_and_hms(2021, 4, 9, 18, 20, 0).unwrap();

    let text = fmtcache::format(&cache, instant, "dd MMM yyyy HH:mm").unwrap();
    assert_eq!(text, "09 Apr 2021 18:20");

    let parsed = fmtcache::parse(&cache, &text, "dd MMM yyyy HH:mm").unwrap();
    assert_eq!(parsed, instant);

    assert_eq!(cache.size(), 1);
    assert_eq!(cache.stats().constructions(), 1);
    assert_eq!(cache.stats().misses(), 1);
    assert_eq!(cache.stats().hits(), 1);
}

#[test]
fn test_format_naive_date() {
    let cache = cache();
    let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    assert_eq!(
        fmtcache::format(&cache, date, "EEEE d MMMM y").unwrap(),
        "Friday 31 December 1999"
    );
}

#[test]
fn test_parse_reads_fields() {
    let cache = cache();
    let parsed = fmtcache::parse(&cache, "7/4/1976 9:30 PM", "M/d/yyyy h:mm a").unwrap();
    assert_eq!((parsed.year(), parsed.month(), parsed.day()), (1976, 7, 4));
    assert_eq!((parsed.hour(), parsed.minute()), (21, 30));
}

#[test]
fn test_name_helpers_follow_cache_locale() {
    let cache = FormatterCache::new(
        FormatterOptions::default()
            .with_time_zone(Zone::Utc)
            .with_locale(Locale::de_de()),
    );
    let date = Utc.with_ymd_and_hms(2020, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(weekday_name(&cache, date), "Sonntag");
    assert_eq!(month_name(&cache, date), "März");
    assert_eq!(cache.keys(), vec!["EEEE".to_string(), "MMMM".to_string()]);
}
