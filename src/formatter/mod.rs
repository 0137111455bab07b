//! Date formatter: a compiled pattern bound to a locale, zone and calendar.

mod render;
mod scan;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};

use crate::ast::DatePattern;
use crate::error::{DateParseError, PatternError};
use crate::options::FormatterOptions;
use crate::value::DateValue;

/// A reusable formatter for one date pattern.
///
/// The pattern, locale, time zone and calendar are fixed at construction.
/// Formatters are immutable and cheap to share behind an `Arc`, which is how
/// [`FormatterCache`](crate::FormatterCache) hands them out.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    source: String,
    pattern: DatePattern,
    options: FormatterOptions,
}

impl DateFormatter {
    /// Compile `pattern` and bind it to `options`.
    pub fn new(pattern: &str, options: FormatterOptions) -> Result<Self, PatternError> {
        let compiled = DatePattern::parse(pattern)?;
        Ok(Self {
            source: pattern.to_string(),
            pattern: compiled,
            options,
        })
    }

    /// The pattern string this formatter was built from.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// The compiled pattern.
    pub fn compiled(&self) -> &DatePattern {
        &self.pattern
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Format a date value.
    ///
    /// Instants are shown in the formatter's time zone. Naive values are
    /// shown as-is; zone fields then use the zone's offset at that wall time.
    pub fn format(&self, value: impl Into<DateValue>) -> String {
        let (local, offset) = self.wall_clock(value.into());
        render::render(&self.pattern, &local, offset, &self.options)
    }

    /// Parse text into an offset date-time.
    ///
    /// The whole input must match. A zone field in the pattern decides the
    /// offset; otherwise the wall time is resolved in the formatter's zone.
    pub fn parse(&self, text: &str) -> Result<DateTime<FixedOffset>, DateParseError> {
        scan::scan(&self.pattern, text, &self.options)
    }

    fn wall_clock(&self, value: DateValue) -> (NaiveDateTime, FixedOffset) {
        let zone = self.options.time_zone;
        if let Some(utc) = value.as_instant() {
            let offset = zone.offset_at_utc(&utc.naive_utc());
            let east = offset.local_minus_utc();
            // Instants at the edge of chrono's range saturate instead of
            // overflowing when shifted into the zone
            let local = utc
                .naive_utc()
                .checked_add_signed(Duration::seconds(i64::from(east)))
                .unwrap_or(if east > 0 {
                    NaiveDateTime::MAX
                } else {
                    NaiveDateTime::MIN
                });
            return (local, offset);
        }
        let local = value.as_naive().unwrap_or_default();

        // Wall times inside a DST gap fall back to the offset at that instant
        let offset = zone
            .offset_at_local(&local)
            .unwrap_or_else(|| zone.offset_at_utc(&local));
        (local, offset)
    }
}
