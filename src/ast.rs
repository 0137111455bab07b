//! AST types for compiled date patterns.

use crate::error::PatternError;

/// Width of a text field (month, weekday, era).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWidth {
    /// `MMM`, `EEE` - Jan, Mon
    Abbreviated,
    /// `MMMM`, `EEEE` - January, Monday
    Wide,
    /// `MMMMM`, `EEEEE` - J, M
    Narrow,
}

/// How a month is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthForm {
    /// `M`, `MM` - numeric with the given minimum width
    Numeric(u8),
    /// `MMM` and longer
    Text(TextWidth),
}

/// Hour numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    /// `H` - 0-23
    H23,
    /// `h` - 1-12
    H12,
    /// `K` - 0-11
    H11,
    /// `k` - 1-24
    H24,
}

impl HourCycle {
    /// Returns true if this cycle needs an AM/PM marker to be unambiguous.
    pub fn is_twelve_hour(&self) -> bool {
        matches!(self, HourCycle::H12 | HourCycle::H11)
    }
}

/// ISO 8601 style offset rendering (`Z`, `x`, `X`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoZone {
    /// `+05:30` rather than `+0530`
    pub extended: bool,
    /// Omit minutes when they are zero (`+05`)
    pub optional_minutes: bool,
    /// Print `Z` for a zero offset
    pub utc_designator: bool,
}

/// Time zone presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStyle {
    /// `z`, `zz`, `zzz` - GMT, GMT+5, GMT+5:30
    GmtShort,
    /// `zzzz`, `ZZZZ` - GMT, GMT+05:00
    GmtLong,
    Iso(IsoZone),
}

/// A single date/time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `G` - era (BC/AD)
    Era(TextWidth),
    /// `y` - year of era; a width of 2 truncates to two digits
    Year(u8),
    /// `M`/`L` - month
    Month(MonthForm),
    /// `d` - day of month
    Day(u8),
    /// `D` - day of year
    DayOfYear(u8),
    /// `E` - day of week
    Weekday(TextWidth),
    /// `a` - AM/PM marker
    DayPeriod,
    /// `H`, `h`, `K`, `k`
    Hour { cycle: HourCycle, width: u8 },
    /// `m` - minute
    Minute(u8),
    /// `s` - second
    Second(u8),
    /// `S` - fractional second with the given number of digits
    FractionalSecond(u8),
    /// `z`, `Z`, `x`, `X`
    Zone(ZoneStyle),
}

impl Field {
    /// Returns true if this field renders as digits.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Field::Year(_)
                | Field::Month(MonthForm::Numeric(_))
                | Field::Day(_)
                | Field::DayOfYear(_)
                | Field::Hour { .. }
                | Field::Minute(_)
                | Field::Second(_)
                | Field::FractionalSecond(_)
        )
    }

    /// Returns true if this field belongs to the calendar date.
    pub fn is_date_field(&self) -> bool {
        matches!(
            self,
            Field::Era(_)
                | Field::Year(_)
                | Field::Month(_)
                | Field::Day(_)
                | Field::DayOfYear(_)
                | Field::Weekday(_)
        )
    }

    /// Returns true if this field belongs to the time of day.
    pub fn is_time_field(&self) -> bool {
        matches!(
            self,
            Field::DayPeriod
                | Field::Hour { .. }
                | Field::Minute(_)
                | Field::Second(_)
                | Field::FractionalSecond(_)
        )
    }

    /// Minimum digit count requested by the pattern (numeric fields only).
    pub fn width(&self) -> Option<u8> {
        match self {
            Field::Year(w)
            | Field::Month(MonthForm::Numeric(w))
            | Field::Day(w)
            | Field::DayOfYear(w)
            | Field::Hour { width: w, .. }
            | Field::Minute(w)
            | Field::Second(w)
            | Field::FractionalSecond(w) => Some(*w),
            _ => None,
        }
    }
}

/// A single part of a date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// Literal text (unquoted punctuation or quoted text)
    Literal(String),
    Field(Field),
}

/// Pre-computed facts about a pattern to avoid repeated scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMetadata {
    pub has_date_fields: bool,
    pub has_time_fields: bool,
    pub has_zone: bool,
    pub has_day_period: bool,
}

/// A compiled date pattern.
///
/// This is the expensive half of a formatter. It can be reused to format and
/// parse any number of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    parts: Vec<PatternPart>,
    metadata: PatternMetadata,
}

impl DatePattern {
    /// Create a DatePattern from parsed parts.
    pub fn from_parts(parts: Vec<PatternPart>) -> Self {
        let mut metadata = PatternMetadata::default();
        for part in &parts {
            if let PatternPart::Field(field) = part {
                metadata.has_date_fields |= field.is_date_field();
                metadata.has_time_fields |= field.is_time_field();
                metadata.has_zone |= matches!(field, Field::Zone(_));
                metadata.has_day_period |= matches!(field, Field::DayPeriod);
            }
        }
        DatePattern { parts, metadata }
    }

    /// Get the parts of this pattern.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    pub fn metadata(&self) -> &PatternMetadata {
        &self.metadata
    }

    /// Iterate over the fields of this pattern, skipping literals.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.parts.iter().filter_map(|p| match p {
            PatternPart::Field(f) => Some(f),
            PatternPart::Literal(_) => None,
        })
    }

    /// Returns true if the pattern has date fields but no time fields.
    pub fn is_date_only(&self) -> bool {
        self.metadata.has_date_fields && !self.metadata.has_time_fields
    }

    /// Returns true if the pattern has time fields but no date fields.
    pub fn is_time_only(&self) -> bool {
        self.metadata.has_time_fields && !self.metadata.has_date_fields
    }

    /// Parse a pattern string into a DatePattern.
    pub fn parse(pattern: &str) -> Result<DatePattern, PatternError> {
        crate::parser::parse(pattern)
    }
}
