//! Calendar differences and relative-time descriptions.

use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeZone};

/// Calendar-aware difference between two instants, largest unit first.
///
/// `months` is always below 12, `hours` below 24 and so on. All fields share
/// the sign of the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateComponents {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DateComponents {
    fn negated(self) -> Self {
        DateComponents {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
        }
    }

    /// Whole weeks in the day component.
    pub fn weeks(&self) -> i64 {
        self.days / 7
    }
}

/// Difference from `from` to `to`, measured on `from`'s wall clock.
pub fn components_between<A: TimeZone, B: TimeZone>(
    from: &DateTime<A>,
    to: &DateTime<B>,
) -> DateComponents {
    let start = from.naive_local();
    let end = to.with_timezone(&from.timezone()).naive_local();

    if end < start {
        forward_components(end, start).negated()
    } else {
        forward_components(start, end)
    }
}

fn forward_components(start: NaiveDateTime, end: NaiveDateTime) -> DateComponents {
    let estimate = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut months = estimate.max(0) as u32;

    // Month addition clamps to the end of shorter months, so step back until
    // the anchor no longer overshoots
    let anchor = loop {
        match start.checked_add_months(Months::new(months)) {
            Some(anchor) if anchor <= end => break anchor,
            _ if months == 0 => break start,
            _ => months -= 1,
        }
    };

    let remainder = end - anchor;
    DateComponents {
        years: i64::from(months / 12),
        months: i64::from(months % 12),
        days: remainder.num_days(),
        hours: remainder.num_hours() % 24,
        minutes: remainder.num_minutes() % 60,
        seconds: remainder.num_seconds() % 60,
    }
}

/// Short offset of `date` from `from`: `"2y"`, `"3M"`, `"1w"`, `"4d"`, `"5h"`,
/// `"6m"`, `"7s"`, or an empty string when `date` is not after `from`.
pub fn offset_description<A: TimeZone, B: TimeZone>(
    date: &DateTime<A>,
    from: &DateTime<B>,
) -> String {
    let diff = components_between(from, date);

    if diff.years > 0 {
        format!("{}y", diff.years)
    } else if diff.months > 0 {
        format!("{}M", diff.months)
    } else if diff.weeks() > 0 {
        format!("{}w", diff.weeks())
    } else if diff.days > 0 {
        format!("{}d", diff.days)
    } else if diff.hours > 0 {
        format!("{}h", diff.hours)
    } else if diff.minutes > 0 {
        format!("{}m", diff.minutes)
    } else if diff.seconds > 0 {
        format!("{}s", diff.seconds)
    } else {
        String::new()
    }
}

/// How long ago `date` was relative to `now`, e.g. `"3 days ago"`.
///
/// Dates at or after `now` read `"Just now"`.
pub fn time_ago<A: TimeZone, B: TimeZone>(date: &DateTime<A>, now: &DateTime<B>) -> String {
    let diff = components_between(date, now);
    let units = [
        (diff.years, "year"),
        (diff.months, "month"),
        (diff.days, "day"),
        (diff.hours, "hour"),
        (diff.minutes, "minute"),
        (diff.seconds, "second"),
    ];

    match units.iter().find(|(count, _)| *count >= 1) {
        Some((1, unit)) => format!("1 {unit} ago"),
        Some((count, unit)) => format!("{count} {unit}s ago"),
        None => "Just now".to_string(),
    }
}
