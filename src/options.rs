//! Formatter options and configuration.

use chrono::{FixedOffset, Local, NaiveDateTime, Offset, TimeZone};

use crate::locale::Locale;

/// The calendar used to number years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    #[default]
    Gregorian,
    /// Thai solar calendar (Gregorian year + 543, era "BE")
    Buddhist,
}

impl Calendar {
    /// Offset added to the Gregorian year to get this calendar's year.
    pub fn year_offset(&self) -> i32 {
        match self {
            Calendar::Gregorian => 0,
            Calendar::Buddhist => 543,
        }
    }
}

/// The time zone a formatter renders instants in and resolves parsed
/// wall-clock times against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    Utc,
    /// The host's local zone, looked up per instant so DST changes apply.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    /// Creates a fixed-offset zone from seconds east of UTC.
    pub fn east(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Zone::Fixed)
    }

    /// Returns the offset in effect at the given UTC date-time.
    pub fn offset_at_utc(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Utc => utc_offset(),
            Zone::Local => Local.offset_from_utc_datetime(utc).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    /// Returns the offset for a wall-clock time in this zone.
    ///
    /// Ambiguous local times resolve to the earlier offset. Returns `None`
    /// when the time falls in a gap (e.g. skipped by a DST transition).
    pub fn offset_at_local(&self, local: &NaiveDateTime) -> Option<FixedOffset> {
        match self {
            Zone::Utc => Some(utc_offset()),
            Zone::Local => Local
                .offset_from_local_datetime(local)
                .earliest()
                .map(|offset| offset.fix()),
            Zone::Fixed(offset) => Some(*offset),
        }
    }
}

fn utc_offset() -> FixedOffset {
    chrono::Utc.fix()
}

/// Options bound to a formatter at construction time.
#[derive(Debug, Clone, Default)]
pub struct FormatterOptions {
    /// Month, weekday, era and day period names.
    pub locale: Locale,
    /// Zone used for rendering instants and resolving parsed times.
    pub time_zone: Zone,
    /// Calendar used for year numbering.
    pub calendar: Calendar,
}

impl FormatterOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_time_zone(mut self, time_zone: Zone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_zone_offsets() {
        let zone = Zone::east(5 * 3600).unwrap();
        let dt = NaiveDate::from_ymd_opt(2020, 11, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(zone.offset_at_utc(&dt).local_minus_utc(), 5 * 3600);
        assert_eq!(zone.offset_at_local(&dt).unwrap().local_minus_utc(), 5 * 3600);
    }

    #[test]
    fn test_out_of_range_offset() {
        assert!(Zone::east(30 * 3600).is_none());
    }
}
