//! Tests for relative-time descriptions.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use fmtcache::relative::{components_between, offset_description, time_ago};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_offset_description_units() {
    let from = base();
    let later = |y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32| {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    };

    assert_eq!(offset_description(&later(2022, 4, 1, 12, 0, 0), &from), "2y");
    assert_eq!(offset_description(&later(2020, 3, 4, 12, 0, 0), &from), "2M");
    assert_eq!(offset_description(&later(2020, 1, 11, 12, 0, 0), &from), "1w");
    assert_eq!(offset_description(&later(2020, 1, 4, 12, 0, 0), &from), "3d");
    assert_eq!(offset_description(&later(2020, 1, 1, 17, 0, 0), &from), "5h");
    assert_eq!(offset_description(&later(2020, 1, 1, 12, 6, 0), &from), "6m");
    assert_eq!(offset_description(&later(2020, 1, 1, 12, 0, 45), &from), "45s");
}

#[test]
fn test_offset_description_not_after() {
    let from = base();
    assert_eq!(offset_description(&from, &from), "");
    assert_eq!(offset_description(&(from - Duration::days(3)), &from), "");
}

#[test]
fn test_time_ago() {
    let now = base();
    assert_eq!(time_ago(&(now - Duration::days(1)), &now), "1 day ago");
    assert_eq!(time_ago(&(now - Duration::hours(3)), &now), "3 hours ago");
    assert_eq!(time_ago(&(now - Duration::seconds(1)), &now), "1 second ago");
    assert_eq!(
        time_ago(&Utc.with_ymd_and_hms(2017, 12, 1, 12, 0, 0).unwrap(), &now),
        "2 years ago"
    );
}

#[test]
fn test_time_ago_future_is_just_now() {
    let now = base();
    assert_eq!(time_ago(&now, &now), "Just now");
    assert_eq!(time_ago(&(now + Duration::minutes(5)), &now), "Just now");
}

#[test]
fn test_mixed_offsets() {
    let now = base();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    // 20:00 in Tokyo is 11:00 UTC, one hour before `now`
    let earlier = tokyo.with_ymd_and_hms(2020, 1, 1, 20, 0, 0).unwrap();
    assert_eq!(time_ago(&earlier, &now), "1 hour ago");
}

#[test]
fn test_leap_day_anniversary() {
    let leap = Utc.with_ymd_and_hms(2020, 2, 29, 0, 0, 0).unwrap();
    let next = Utc.with_ymd_and_hms(2021, 2, 28, 0, 0, 0).unwrap();
    let diff = components_between(&leap, &next);
    assert_eq!((diff.years, diff.months, diff.days), (1, 0, 0));
    assert_eq!(offset_description(&next, &leap), "1y");
}

#[test]
fn test_weeks() {
    let from = base();
    let diff = components_between(&from, &(from + Duration::days(15)));
    assert_eq!(diff.days, 15);
    assert_eq!(diff.weeks(), 2);
}
