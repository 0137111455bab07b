//! Value types that can be formatted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// A value that can be formatted using a date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// A point in time; rendered in the formatter's time zone
    Instant(DateTime<Utc>),
    /// A wall-clock date-time, rendered as-is
    Naive(NaiveDateTime),
    /// A calendar date at midnight
    Date(NaiveDate),
    /// A time of day on the default date
    Time(NaiveTime),
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue {
    fn from(dt: DateTime<Tz>) -> Self {
        DateValue::Instant(dt.with_timezone(&Utc))
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for DateValue {
    fn from(dt: &DateTime<Tz>) -> Self {
        DateValue::Instant(dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        DateValue::Naive(dt)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue::Date(d)
    }
}

impl From<NaiveTime> for DateValue {
    fn from(t: NaiveTime) -> Self {
        DateValue::Time(t)
    }
}

impl DateValue {
    /// Returns the instant if this value is one.
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            DateValue::Instant(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the wall-clock date-time for non-instant values.
    ///
    /// Times are placed on the default date (2000-01-01) used by parsing.
    pub fn as_naive(&self) -> Option<NaiveDateTime> {
        match self {
            DateValue::Instant(_) => None,
            DateValue::Naive(dt) => Some(*dt),
            DateValue::Date(d) => Some(d.and_time(NaiveTime::MIN)),
            DateValue::Time(t) => Some(default_date().and_time(*t)),
        }
    }
}

/// The date used when a value or parsed text carries no date: 2000-01-01.
pub fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}
