//! Tests for the formatter cache contract.

use std::sync::Arc;

use fmtcache::{DateFormatter, FormatterCache, FormatterOptions, Zone};

fn utc_cache() -> FormatterCache {
    FormatterCache::new(FormatterOptions::default().with_time_zone(Zone::Utc))
}

#[test]
fn test_idempotent_construction() {
    let cache = utc_cache();
    let first = cache.formatter_for("yyyy-MM-dd").unwrap();
    let second = cache.formatter_for("yyyy-MM-dd").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &cache.get("yyyy-MM-dd").unwrap()));
}

#[test]
fn test_key_isolation() {
    let cache = utc_cache();
    let formatter = Arc::new(DateFormatter::new("yyyy-MM-dd", cache.options().clone()).unwrap());
    cache.set("yyyy-MM-dd", formatter);

    assert!(cache.contains("yyyy-MM-dd"));
    assert!(!cache.contains("HH:mm:ss"));
    assert!(cache.get("HH:mm:ss").is_none());
}

#[test]
fn test_miss_returns_none() {
    let cache = utc_cache();
    assert!(cache.get("unregistered-key").is_none());
    assert_eq!(cache.size(), 0);
    assert_eq!(cache.stats().misses(), 1);
}

#[test]
fn test_get_does_not_construct() {
    let cache = utc_cache();
    cache.get("yyyy");
    cache.get("yyyy");
    assert!(!cache.contains("yyyy"));
    assert_eq!(cache.stats().constructions(), 0);
}

#[test]
fn test_size_non_decreasing() {
    let cache = utc_cache();
    let patterns = ["yyyy", "MM", "yyyy", "dd", "HH:mm", "MM", "EEEE"];
    let mut last = 0;

    for pattern in patterns {
        cache.formatter_for(pattern).unwrap();
        let size = cache.size();
        assert!(size >= last, "size went from {} to {}", last, size);
        last = size;
    }

    assert_eq!(last, 5);
}

#[test]
fn test_end_to_end_round_trip() {
    let cache = utc_cache();
    let formatter = cache.formatter_for("yyyy-MM-dd").unwrap();
    let date = formatter.parse("2020-11-10").unwrap();

    let again = cache.formatter_for("yyyy-MM-dd").unwrap();
    assert_eq!(again.format(date), "2020-11-10");
}

#[test]
fn test_round_trip_in_local_zone() {
    // Default options use the host zone
    let cache = FormatterCache::default();
    let formatter = cache.formatter_for("yyyy-MM-dd").unwrap();
    let date = formatter.parse("2020-11-10").unwrap();
    assert_eq!(formatter.format(date), "2020-11-10");
}

#[test]
fn test_formatters_inherit_cache_options() {
    let options = FormatterOptions::default()
        .with_locale(fmtcache::Locale::fr_fr())
        .with_time_zone(Zone::Utc);
    let cache = FormatterCache::new(options);
    let formatter = cache.formatter_for("MMMM").unwrap();
    assert_eq!(formatter.options().locale.identifier, "fr_FR");
    assert_eq!(formatter.options().time_zone, Zone::Utc);
}
