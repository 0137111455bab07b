//! Date helpers backed by a [`FormatterCache`].
//!
//! Every helper looks its pattern up in the cache, so repeated calls with the
//! same pattern reuse one compiled formatter.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::builtin_patterns::{HTTP_DATE_PATTERNS, ISO_8601_DATE};
use crate::cache::FormatterCache;
use crate::error::{Error, PatternError};
use crate::value::DateValue;

/// Parse `text` with `pattern`.
pub fn parse_date(
    cache: &FormatterCache,
    text: &str,
    pattern: &str,
) -> Result<DateTime<FixedOffset>, Error> {
    let formatter = cache.formatter_for(pattern)?;
    Ok(formatter.parse(text)?)
}

/// Format `value` with `pattern`.
pub fn format_date(
    cache: &FormatterCache,
    value: impl Into<DateValue>,
    pattern: &str,
) -> Result<String, PatternError> {
    Ok(cache.formatter_for(pattern)?.format(value))
}

/// Parse a date as sent in HTTP headers and common API payloads.
///
/// Tries RFC 1123, RFC 850, asctime and the ISO 8601 shapes in turn and
/// returns the first match. Name matching uses the cache's locale, so the
/// cache should be built with an English locale.
pub fn parse_http_date(cache: &FormatterCache, text: &str) -> Option<DateTime<FixedOffset>> {
    HTTP_DATE_PATTERNS.iter().find_map(|pattern| {
        cache
            .formatter_for(pattern)
            .ok()
            .and_then(|formatter| formatter.parse(text).ok())
    })
}

/// Full weekday name of `value` in the cache's locale and zone.
pub fn weekday_name(cache: &FormatterCache, value: impl Into<DateValue>) -> String {
    render_builtin(cache, value, "EEEE")
}

/// Full month name of `value` in the cache's locale and zone.
pub fn month_name(cache: &FormatterCache, value: impl Into<DateValue>) -> String {
    render_builtin(cache, value, "MMMM")
}

/// True if both instants fall on the same calendar day in the cache's zone.
pub fn is_same_day<A: TimeZone, B: TimeZone>(
    cache: &FormatterCache,
    a: &DateTime<A>,
    b: &DateTime<B>,
) -> bool {
    render_builtin(cache, a, ISO_8601_DATE) == render_builtin(cache, b, ISO_8601_DATE)
}

/// True if `date` falls on the same day as `now`.
pub fn is_today<A: TimeZone, B: TimeZone>(
    cache: &FormatterCache,
    date: &DateTime<A>,
    now: &DateTime<B>,
) -> bool {
    is_same_day(cache, date, now)
}

/// True if `date` falls on the day before `now`.
pub fn is_yesterday<A: TimeZone, B: TimeZone>(
    cache: &FormatterCache,
    date: &DateTime<A>,
    now: &DateTime<B>,
) -> bool {
    now.clone()
        .checked_sub_days(Days::new(1))
        .is_some_and(|yesterday| is_same_day(cache, date, &yesterday))
}

/// True if `date` falls on the day after `now`.
pub fn is_tomorrow<A: TimeZone, B: TimeZone>(
    cache: &FormatterCache,
    date: &DateTime<A>,
    now: &DateTime<B>,
) -> bool {
    now.clone()
        .checked_add_days(Days::new(1))
        .is_some_and(|tomorrow| is_same_day(cache, date, &tomorrow))
}

/// True if both instants fall in the same calendar month in the cache's zone.
pub fn is_this_month<A: TimeZone, B: TimeZone>(
    cache: &FormatterCache,
    date: &DateTime<A>,
    now: &DateTime<B>,
) -> bool {
    render_builtin(cache, date, "yyyy-MM") == render_builtin(cache, now, "yyyy-MM")
}

/// True if `date` is within seven days of `now`, before or after.
pub fn is_this_week<A: TimeZone, B: TimeZone>(date: &DateTime<A>, now: &DateTime<B>) -> bool {
    minutes_between(date, now) <= MINUTES_IN_A_WEEK
}

pub fn is_future<A: TimeZone, B: TimeZone>(date: &DateTime<A>, now: &DateTime<B>) -> bool {
    date.naive_utc() > now.naive_utc()
}

pub fn is_past<A: TimeZone, B: TimeZone>(date: &DateTime<A>, now: &DateTime<B>) -> bool {
    date.naive_utc() < now.naive_utc()
}

const MINUTES_IN_A_WEEK: f64 = 7.0 * 24.0 * 60.0;

/// Absolute time between two instants, in fractional seconds.
pub fn seconds_between<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> f64 {
    let delta = a.naive_utc() - b.naive_utc();
    (delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9).abs()
}

pub fn minutes_between<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> f64 {
    seconds_between(a, b) / 60.0
}

pub fn hours_between<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> f64 {
    seconds_between(a, b) / 3600.0
}

pub fn days_between<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> f64 {
    seconds_between(a, b) / 86_400.0
}

/// Midnight on the given Gregorian date in the cache's zone.
///
/// Returns `None` for an invalid date or when midnight does not exist
/// locally.
pub fn date_from(
    cache: &FormatterCache,
    year: i32,
    month: u32,
    day: u32,
) -> Option<DateTime<FixedOffset>> {
    let local = NaiveDate::from_ymd_opt(year, month, day)?.and_time(NaiveTime::MIN);
    let offset = cache.options().time_zone.offset_at_local(&local)?;
    offset.from_local_datetime(&local).single()
}

/// Render with a pattern known to compile.
fn render_builtin(cache: &FormatterCache, value: impl Into<DateValue>, pattern: &str) -> String {
    match cache.formatter_for(pattern) {
        Ok(formatter) => formatter.format(value),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FormatterOptions, Zone};
    use chrono::{Duration, Utc};

    fn cache() -> FormatterCache {
        FormatterCache::new(FormatterOptions::default().with_time_zone(Zone::Utc))
    }

    #[test]
    fn test_day_predicates() {
        let cache = cache();
        let now = Utc.with_ymd_and_hms(2021, 4, 9, 0, 30, 0).unwrap();
        let earlier_today = Utc.with_ymd_and_hms(2021, 4, 9, 0, 0, 1).unwrap();
        let late_yesterday = Utc.with_ymd_and_hms(2021, 4, 8, 23, 59, 0).unwrap();
        let tomorrow = Utc.with_ymd_and_hms(2021, 4, 10, 12, 0, 0).unwrap();

        assert!(is_today(&cache, &earlier_today, &now));
        assert!(!is_today(&cache, &late_yesterday, &now));
        assert!(is_yesterday(&cache, &late_yesterday, &now));
        assert!(is_tomorrow(&cache, &tomorrow, &now));
        assert!(!is_tomorrow(&cache, &now, &now));
    }

    #[test]
    fn test_month_and_week_predicates() {
        let cache = cache();
        let now = Utc.with_ymd_and_hms(2021, 4, 30, 23, 0, 0).unwrap();
        let start_of_month = Utc.with_ymd_and_hms(2021, 4, 1, 0, 0, 0).unwrap();
        let next_month = Utc.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap();
        let last_year = Utc.with_ymd_and_hms(2020, 4, 15, 0, 0, 0).unwrap();

        assert!(is_this_month(&cache, &start_of_month, &now));
        assert!(!is_this_month(&cache, &next_month, &now));
        assert!(!is_this_month(&cache, &last_year, &now));

        assert!(is_this_week(&(now - Duration::days(7)), &now));
        assert!(is_this_week(&(now + Duration::days(3)), &now));
        assert!(!is_this_week(&(now - Duration::days(8)), &now));
    }

    #[test]
    fn test_future_and_past() {
        let now = Utc.with_ymd_and_hms(2021, 4, 9, 12, 0, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        // Same instant in another zone is neither
        let same = now.with_timezone(&plus_two);
        assert!(!is_future(&same, &now));
        assert!(!is_past(&same, &now));
        assert!(is_future(&(now + Duration::seconds(1)), &now));
        assert!(is_past(&(now - Duration::seconds(1)), &now));
    }

    #[test]
    fn test_intervals_are_absolute() {
        let a = Utc.with_ymd_and_hms(2021, 4, 9, 0, 0, 0).unwrap();
        let b = a + Duration::hours(36) + Duration::milliseconds(500);
        assert_eq!(seconds_between(&a, &b), 129_600.5);
        assert_eq!(seconds_between(&b, &a), 129_600.5);
        assert_eq!(hours_between(&a, &(a + Duration::minutes(90))), 1.5);
        assert_eq!(minutes_between(&a, &(a - Duration::seconds(90))), 1.5);
        assert_eq!(days_between(&b, &(b + Duration::hours(36))), 1.5);
    }

    #[test]
    fn test_date_from() {
        let cache = cache();
        let date = date_from(&cache, 2021, 2, 28).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2021, 2, 28, 0, 0, 0).unwrap());
        assert_eq!(date_from(&cache, 2021, 2, 29), None);
        assert_eq!(date_from(&cache, 2021, 13, 1), None);

        let tokyo = FormatterCache::new(
            FormatterOptions::default().with_time_zone(Zone::east(9 * 3600).unwrap()),
        );
        let date = date_from(&tokyo, 2021, 1, 1).unwrap();
        assert_eq!(date.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(date, Utc.with_ymd_and_hms(2020, 12, 31, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_names() {
        let cache = cache();
        let date = Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap();
        assert_eq!(weekday_name(&cache, date), "Tuesday");
        assert_eq!(month_name(&cache, date), "November");
    }
}
