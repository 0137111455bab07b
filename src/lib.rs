//! fmtcache - thread-safe cache of compiled LDML date formatters
//!
//! Building a date formatter means compiling its pattern, which is wasted
//! work when the same handful of patterns are used over and over. A
//! [`FormatterCache`] compiles each pattern once and hands out shared
//! [`DateFormatter`]s to any number of threads.
//!
//! ```
//! use fmtcache::{FormatterCache, FormatterOptions, Zone};
//!
//! let cache = FormatterCache::new(FormatterOptions::default().with_time_zone(Zone::Utc));
//! let formatter = cache.formatter_for("yyyy-MM-dd").unwrap();
//! let date = formatter.parse("2020-11-10").unwrap();
//! assert_eq!(formatter.format(date), "2020-11-10");
//! ```

pub mod ast;
pub mod error;
pub mod options;
pub mod value;

pub mod builtin_patterns;
pub mod dates;
pub mod relative;

mod cache;
mod formatter;
mod locale;
pub mod parser;
mod stats;
mod sync_map;

pub use ast::{DatePattern, Field, PatternPart};
pub use cache::FormatterCache;
pub use error::{DateParseError, Error, PatternError};
pub use formatter::DateFormatter;
pub use locale::Locale;
pub use options::{Calendar, FormatterOptions, Zone};
pub use stats::CacheStats;
pub use sync_map::SynchronizedMap;
pub use value::DateValue;

/// Format `value` with `pattern` using a formatter from `cache`.
///
/// Convenience function that looks the pattern up (compiling it on first
/// use) and formats in one call.
pub fn format(
    cache: &FormatterCache,
    value: impl Into<DateValue>,
    pattern: &str,
) -> Result<String, PatternError> {
    dates::format_date(cache, value, pattern)
}

/// Parse `text` with `pattern` using a formatter from `cache`.
pub fn parse(
    cache: &FormatterCache,
    text: &str,
    pattern: &str,
) -> Result<chrono::DateTime<chrono::FixedOffset>, Error> {
    dates::parse_date(cache, text, pattern)
}
