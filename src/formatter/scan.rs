//! Parsing text into date/time values.
//!
//! Scanning walks the compiled pattern part by part. Literal parts must match
//! the input exactly, except that a space matches any run of whitespace.
//! Numeric fields read greedily unless the next part is another numeric field,
//! in which case they read exactly their pattern width (`yyyyMMdd`).

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::ast::{DatePattern, Field, HourCycle, MonthForm, PatternPart, TextWidth, ZoneStyle};
use crate::error::DateParseError;
use crate::options::{Calendar, FormatterOptions};
use crate::value::default_date;

/// Two-digit years below this pivot land in the 2000s, the rest in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: u64 = 69;

/// RFC 822 zone abbreviations and their offsets in hours.
const US_ZONES: [(&str, i32); 8] = [
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

/// Parse text with the given pattern.
pub fn scan(
    pattern: &DatePattern,
    text: &str,
    opts: &FormatterOptions,
) -> Result<DateTime<FixedOffset>, DateParseError> {
    let mut cursor = Cursor::new(text);
    let mut fields = ParsedFields::default();
    let parts = pattern.parts();

    for (i, part) in parts.iter().enumerate() {
        match part {
            PatternPart::Literal(literal) => cursor.expect_literal(literal)?,
            PatternPart::Field(field) => {
                let abutting = matches!(
                    parts.get(i + 1),
                    Some(PatternPart::Field(next)) if next.is_numeric()
                );
                scan_field(&mut cursor, *field, abutting, &mut fields, opts)?;
            }
        }
    }

    if !cursor.at_end() {
        return Err(DateParseError::TrailingInput {
            position: cursor.pos,
        });
    }

    fields.resolve(opts)
}

/// Field values collected while scanning.
#[derive(Debug, Default)]
struct ParsedFields {
    before_common_era: bool,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    ordinal: Option<u32>,
    hour: Option<(u32, HourCycle)>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    nanos: Option<u32>,
    offset: Option<FixedOffset>,
}

impl ParsedFields {
    /// Combine the scanned fields into an offset date-time.
    fn resolve(self, opts: &FormatterOptions) -> Result<DateTime<FixedOffset>, DateParseError> {
        let date = self.resolve_date(opts.calendar)?;

        let hour = match self.hour {
            None => 0,
            Some((hour, HourCycle::H23)) => hour,
            Some((hour, HourCycle::H24)) => hour % 24,
            Some((hour, HourCycle::H12 | HourCycle::H11)) => {
                if hour > 12 {
                    hour
                } else if self.pm == Some(true) {
                    hour % 12 + 12
                } else {
                    hour % 12
                }
            }
        };
        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, self.nanos.unwrap_or(0))
            .ok_or(DateParseError::InvalidTime {
                hour,
                minute,
                second,
            })?;

        let local = date.and_time(time);
        let offset = match self.offset {
            Some(offset) => offset,
            None => opts
                .time_zone
                .offset_at_local(&local)
                .ok_or(DateParseError::NonexistentLocalTime)?,
        };

        offset
            .from_local_datetime(&local)
            .single()
            .ok_or(DateParseError::NonexistentLocalTime)
    }

    fn resolve_date(&self, calendar: Calendar) -> Result<NaiveDate, DateParseError> {
        let Some(year) = self.year else {
            return self.date_in_year(default_date().year());
        };

        let gregorian = match calendar {
            Calendar::Buddhist => year - calendar.year_offset(),
            Calendar::Gregorian if self.before_common_era => 1 - year,
            Calendar::Gregorian => year,
        };
        self.date_in_year(gregorian)
    }

    fn date_in_year(&self, year: i32) -> Result<NaiveDate, DateParseError> {
        if let (Some(ordinal), None, None) = (self.ordinal, self.month, self.day) {
            return NaiveDate::from_yo_opt(year, ordinal).ok_or(DateParseError::InvalidDate {
                year,
                month: 1,
                day: ordinal,
            });
        }

        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateParseError::InvalidDate { year, month, day })
    }
}

/// Scan a single field into `fields`.
fn scan_field(
    cursor: &mut Cursor<'_>,
    field: Field,
    abutting: bool,
    fields: &mut ParsedFields,
    opts: &FormatterOptions,
) -> Result<(), DateParseError> {
    let locale = &opts.locale;
    let digits = |max: usize| -> (usize, usize) {
        let width = field.width().map(usize::from).unwrap_or(1);
        if abutting {
            (width, width)
        } else {
            (1, max.max(width))
        }
    };

    match field {
        Field::Era(width) => {
            let start = cursor.pos;
            if opts.calendar == Calendar::Buddhist && cursor.eat_ignore_case("BE") {
                return Ok(());
            }
            let era = match width {
                TextWidth::Narrow => {
                    let narrow = [locale.era_name_narrow(0), locale.era_name_narrow(1)];
                    cursor.match_narrow(&narrow, true)
                }
                _ => cursor.match_name(&[&locale.era_names_full, &locale.era_names_short]),
            }
            .ok_or(DateParseError::UnknownName {
                position: start,
                field: "era",
            })?;
            fields.before_common_era = era == 0;
        }

        Field::Year(width) => {
            let (min, max) = digits(4);
            let (value, len) = cursor.digits(min, max, "year")?;
            let year = if width == 2 && len <= 2 {
                if value < TWO_DIGIT_YEAR_PIVOT {
                    2000 + value
                } else {
                    1900 + value
                }
            } else {
                value
            };
            fields.year = Some(year as i32);
        }

        Field::Month(MonthForm::Numeric(_)) => {
            let (min, max) = digits(2);
            let position = cursor.pos;
            let (month, _) = cursor.digits(min, max, "month")?;
            if !(1..=12).contains(&month) {
                return Err(DateParseError::InvalidNumber {
                    position,
                    field: "month",
                });
            }
            fields.month = Some(month as u32);
        }
        Field::Month(MonthForm::Text(width)) => {
            let start = cursor.pos;
            let month0 = match width {
                TextWidth::Narrow => {
                    let narrow: Vec<String> =
                        (0..12).map(|m| locale.month_name_narrow(m)).collect();
                    cursor.match_narrow(&narrow, true)
                }
                _ => cursor.match_name(&[&locale.month_names_full, &locale.month_names_short]),
            }
            .ok_or(DateParseError::UnknownName {
                position: start,
                field: "month",
            })?;
            fields.month = Some(month0 as u32 + 1);
        }

        Field::Day(_) => {
            let (min, max) = digits(2);
            fields.day = Some(cursor.digits(min, max, "day")?.0 as u32);
        }
        Field::DayOfYear(_) => {
            let (min, max) = digits(3);
            fields.ordinal = Some(cursor.digits(min, max, "day of year")?.0 as u32);
        }
        Field::Weekday(width) => {
            // Accepted for shape only; the date comes from the other fields
            let start = cursor.pos;
            let weekday = match width {
                TextWidth::Narrow => {
                    let narrow: Vec<String> = (0..7).map(|d| locale.day_name_narrow(d)).collect();
                    cursor.match_narrow(&narrow, false)
                }
                _ => cursor.match_name(&[&locale.day_names_full, &locale.day_names_short]),
            };
            weekday.ok_or(DateParseError::UnknownName {
                position: start,
                field: "weekday",
            })?;
        }

        Field::DayPeriod => {
            let start = cursor.pos;
            let period = cursor
                .match_name(&[&[locale.am_string, locale.pm_string], &["AM", "PM"]])
                .ok_or(DateParseError::UnknownName {
                    position: start,
                    field: "day period",
                })?;
            fields.pm = Some(period == 1);
        }
        Field::Hour { cycle, .. } => {
            let (min, max) = digits(2);
            let position = cursor.pos;
            let (hour, _) = cursor.digits(min, max, "hour")?;
            if hour > 24 {
                return Err(DateParseError::InvalidNumber {
                    position,
                    field: "hour",
                });
            }
            fields.hour = Some((hour as u32, cycle));
        }
        Field::Minute(_) => {
            let (min, max) = digits(2);
            fields.minute = Some(cursor.digits(min, max, "minute")?.0 as u32);
        }
        Field::Second(_) => {
            let (min, max) = digits(2);
            fields.second = Some(cursor.digits(min, max, "second")?.0 as u32);
        }
        Field::FractionalSecond(_) => {
            let (min, max) = digits(9);
            let (value, len) = cursor.digits(min, max.min(9), "fractional second")?;
            fields.nanos = Some(value as u32 * 10_u32.pow(9 - len as u32));
        }

        Field::Zone(style) => {
            fields.offset = Some(cursor.zone(style)?);
        }
    }

    Ok(())
}

/// Position-tracking reader over the input text.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    /// Consumes whitespace and returns how many characters were skipped.
    fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while let Some(ch) = self.peek().filter(|c| c.is_whitespace()) {
            self.bump(ch);
            skipped += 1;
        }
        skipped
    }

    fn expect_literal(&mut self, literal: &str) -> Result<(), DateParseError> {
        let mut previous_was_space = false;

        for expected in literal.chars() {
            if expected.is_whitespace() {
                // A run of pattern spaces matches one run of input whitespace
                if self.skip_whitespace() == 0 && !previous_was_space {
                    return Err(self.mismatch(expected));
                }
                previous_was_space = true;
                continue;
            }
            previous_was_space = false;

            match self.peek() {
                Some(ch) if ch == expected => self.bump(ch),
                _ => return Err(self.mismatch(expected)),
            }
        }

        Ok(())
    }

    fn mismatch(&self, expected: char) -> DateParseError {
        if self.at_end() {
            DateParseError::UnexpectedEnd {
                position: self.pos,
                expected: "literal text",
            }
        } else {
            DateParseError::LiteralMismatch {
                position: self.pos,
                expected,
            }
        }
    }

    /// Reads between `min` and `max` ASCII digits.
    fn digits(
        &mut self,
        min: usize,
        max: usize,
        field: &'static str,
    ) -> Result<(u64, usize), DateParseError> {
        let bytes = self.rest().as_bytes();
        let mut value: u64 = 0;
        let mut len = 0;

        while len < max && len < bytes.len() && bytes[len].is_ascii_digit() {
            value = value * 10 + u64::from(bytes[len] - b'0');
            len += 1;
        }

        if len < min {
            return Err(if self.pos + len >= self.text.len() {
                DateParseError::UnexpectedEnd {
                    position: self.pos + len,
                    expected: field,
                }
            } else {
                DateParseError::InvalidNumber {
                    position: self.pos,
                    field,
                }
            });
        }

        self.pos += len;
        Ok((value, len))
    }

    /// Consumes `expected` if the input starts with it, ignoring case.
    fn eat_ignore_case(&mut self, expected: &str) -> bool {
        let matched = self
            .rest()
            .get(..expected.len())
            .is_some_and(|prefix| prefix.to_lowercase() == expected.to_lowercase());
        if matched {
            self.pos += expected.len();
        }
        matched
    }

    /// Consumes the longest name from any of the tables, ignoring case.
    /// Returns the index of the name within its table.
    fn match_name(&mut self, tables: &[&[&str]]) -> Option<usize> {
        let rest = self.rest();
        let mut best: Option<(usize, usize)> = None;

        for table in tables {
            for (index, name) in table.iter().enumerate() {
                let len = name.len();
                let matches = rest
                    .get(..len)
                    .is_some_and(|prefix| prefix.to_lowercase() == name.to_lowercase());
                if matches && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((index, len));
                }
            }
        }

        best.map(|(index, len)| {
            self.pos += len;
            index
        })
    }

    /// Consumes a one-letter narrow name and returns its index. With `unique`,
    /// a letter shared by several names (`J` for three months) is rejected.
    fn match_narrow(&mut self, narrow: &[String], unique: bool) -> Option<usize> {
        let ch = self.peek()?;
        let letter: String = ch.to_uppercase().collect();
        let mut hits = narrow
            .iter()
            .enumerate()
            .filter(|(_, name)| **name == letter)
            .map(|(index, _)| index);

        let first = hits.next()?;
        if unique && hits.next().is_some() {
            return None;
        }
        self.bump(ch);
        Some(first)
    }

    /// Reads a zone designator and returns its offset.
    fn zone(&mut self, style: ZoneStyle) -> Result<FixedOffset, DateParseError> {
        let start = self.pos;
        let invalid = || DateParseError::InvalidOffset { position: start };

        if self.peek() == Some('Z') {
            self.bump('Z');
            return FixedOffset::east_opt(0).ok_or_else(invalid);
        }

        for prefix in ["GMT", "UTC", "UT"] {
            if self.eat_ignore_case(prefix) {
                let seconds = match self.peek() {
                    Some('+' | '-') => self.signed_offset(start)?,
                    _ => 0,
                };
                return FixedOffset::east_opt(seconds).ok_or_else(invalid);
            }
        }

        if matches!(style, ZoneStyle::GmtShort) {
            for (abbreviation, hours) in US_ZONES {
                if self.eat_ignore_case(abbreviation) {
                    return FixedOffset::east_opt(hours * 3600).ok_or_else(invalid);
                }
            }
        }

        if matches!(self.peek(), Some('+' | '-')) {
            let seconds = self.signed_offset(start)?;
            return FixedOffset::east_opt(seconds).ok_or_else(invalid);
        }

        Err(invalid())
    }

    /// Reads `±h`, `±hh`, `±hhmm` or `±hh:mm`.
    fn signed_offset(&mut self, start: usize) -> Result<i32, DateParseError> {
        let negative = self.peek() == Some('-');
        self.pos += 1;

        let invalid = DateParseError::InvalidOffset { position: start };
        let (hours, _) = self.digits(1, 2, "offset").map_err(|_| invalid.clone())?;

        let minutes = if self.rest().starts_with(':') {
            self.pos += 1;
            self.digits(2, 2, "offset").map_err(|_| invalid.clone())?.0
        } else if self.rest().bytes().take(2).filter(u8::is_ascii_digit).count() == 2 {
            self.digits(2, 2, "offset")?.0
        } else {
            0
        };

        if hours > 23 || minutes > 59 {
            return Err(invalid);
        }

        let seconds = (hours * 3600 + minutes * 60) as i32;
        Ok(if negative { -seconds } else { seconds })
    }
}
