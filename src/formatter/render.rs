//! Rendering date/time values as text.

use chrono::{Datelike, FixedOffset, NaiveDateTime, Timelike};

use crate::ast::{DatePattern, Field, HourCycle, MonthForm, PatternPart, TextWidth, ZoneStyle};
use crate::options::{Calendar, FormatterOptions};

/// Render a wall-clock date-time with its offset using the given pattern.
pub fn render(
    pattern: &DatePattern,
    local: &NaiveDateTime,
    offset: FixedOffset,
    opts: &FormatterOptions,
) -> String {
    let mut result = String::new();

    for part in pattern.parts() {
        match part {
            PatternPart::Literal(s) => result.push_str(s),
            PatternPart::Field(field) => {
                let formatted = render_field(*field, local, offset, opts);
                result.push_str(&formatted);
            }
        }
    }

    result
}

/// Format a single field.
fn render_field(
    field: Field,
    local: &NaiveDateTime,
    offset: FixedOffset,
    opts: &FormatterOptions,
) -> String {
    let locale = &opts.locale;

    match field {
        Field::Era(width) => {
            if opts.calendar == Calendar::Buddhist {
                return "BE".to_string();
            }
            let era = usize::from(local.year_ce().0);
            match width {
                TextWidth::Abbreviated => locale.era_names_short[era].to_string(),
                TextWidth::Wide => locale.era_names_full[era].to_string(),
                TextWidth::Narrow => locale.era_name_narrow(era),
            }
        }

        // Year formatting
        Field::Year(width) => {
            let year = year_of_era(local, opts.calendar);
            if width == 2 {
                format!("{:02}", year.rem_euclid(100))
            } else {
                pad(year, width)
            }
        }

        // Month formatting
        Field::Month(MonthForm::Numeric(width)) => pad(local.month(), width),
        Field::Month(MonthForm::Text(width)) => {
            let month0 = local.month0() as usize;
            match width {
                TextWidth::Abbreviated => locale.month_names_short[month0].to_string(),
                TextWidth::Wide => locale.month_names_full[month0].to_string(),
                TextWidth::Narrow => locale.month_name_narrow(month0),
            }
        }

        // Day formatting
        Field::Day(width) => pad(local.day(), width),
        Field::DayOfYear(width) => pad(local.ordinal(), width),
        Field::Weekday(width) => {
            // Locale tables are Sunday first
            let weekday0 = local.weekday().num_days_from_sunday() as usize;
            match width {
                TextWidth::Abbreviated => locale.day_names_short[weekday0].to_string(),
                TextWidth::Wide => locale.day_names_full[weekday0].to_string(),
                TextWidth::Narrow => locale.day_name_narrow(weekday0),
            }
        }

        // Time formatting
        Field::DayPeriod => {
            if local.hour() >= 12 {
                locale.pm_string.to_string()
            } else {
                locale.am_string.to_string()
            }
        }
        Field::Hour { cycle, width } => pad(hour_in_cycle(local.hour(), cycle), width),
        Field::Minute(width) => pad(local.minute(), width),
        Field::Second(width) => pad(local.second(), width),
        Field::FractionalSecond(digits) => {
            // Leap seconds are represented as nanos >= 1e9
            let nanos = local.nanosecond() % 1_000_000_000;
            let scaled = nanos / 10_u32.pow(9_u32.saturating_sub(u32::from(digits)));
            format!("{:0width$}", scaled, width = digits as usize)
        }

        Field::Zone(style) => render_zone(offset.local_minus_utc(), style),
    }
}

/// Year number shown for the calendar's current era.
fn year_of_era(local: &NaiveDateTime, calendar: Calendar) -> i64 {
    match calendar {
        Calendar::Gregorian => i64::from(local.year_ce().1),
        Calendar::Buddhist => i64::from(local.year() + calendar.year_offset()),
    }
}

/// Convert a 24-hour clock hour into the given cycle.
fn hour_in_cycle(hour: u32, cycle: HourCycle) -> u32 {
    match cycle {
        HourCycle::H23 => hour,
        HourCycle::H12 => match hour % 12 {
            0 => 12,
            h => h,
        },
        HourCycle::H11 => hour % 12,
        HourCycle::H24 => {
            if hour == 0 {
                24
            } else {
                hour
            }
        }
    }
}

/// Format a UTC offset given in seconds east of UTC.
pub(crate) fn render_zone(seconds: i32, style: ZoneStyle) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;

    match style {
        ZoneStyle::GmtShort => {
            if seconds == 0 {
                "GMT".to_string()
            } else if minutes == 0 {
                format!("GMT{sign}{hours}")
            } else {
                format!("GMT{sign}{hours}:{minutes:02}")
            }
        }
        ZoneStyle::GmtLong => {
            if seconds == 0 {
                "GMT".to_string()
            } else {
                format!("GMT{sign}{hours:02}:{minutes:02}")
            }
        }
        ZoneStyle::Iso(iso) => {
            if seconds == 0 && iso.utc_designator {
                return "Z".to_string();
            }
            let mut out = format!("{sign}{hours:02}");
            if !(iso.optional_minutes && minutes == 0) {
                if iso.extended {
                    out.push(':');
                }
                out.push_str(&format!("{minutes:02}"));
            }
            out
        }
    }
}

fn pad<T: std::fmt::Display>(value: T, width: u8) -> String {
    format!("{:0width$}", value, width = width as usize)
}
