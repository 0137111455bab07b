//! Well-known date patterns.
//!
//! HTTP servers and APIs emit dates in a handful of fixed shapes. These are
//! the LDML spellings of those shapes, in the order `parse_http_date` tries
//! them.

/// `Sun, 06 Nov 1994 08:49:37 GMT`
pub const RFC_1123: &str = "EEE',' dd' 'MMM' 'yyyy HH':'mm':'ss zzz";

/// `Sunday, 06-Nov-94 08:49:37 GMT`
pub const RFC_850: &str = "EEEE',' dd'-'MMM'-'yy HH':'mm':'ss z";

/// `Sun Nov  6 08:49:37 1994`
pub const ASCTIME: &str = "EEE MMM d HH':'mm':'ss yyyy";

/// `1994-11-06`
pub const ISO_8601_DATE: &str = "yyyy-MM-dd";

/// `1994-11-06T08:49+01:00`
pub const ISO_8601_MINUTES: &str = "yyyy-MM-dd'T'HH:mmxxxxx";

/// `1994-11-06T08:49:37+01:00`
pub const ISO_8601_SECONDS: &str = "yyyy-MM-dd'T'HH:mm:ssxxxxx";

/// `1994-11-06T08:49:37.123+01:00`
pub const ISO_8601_MILLIS: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSxxxxx";

/// Patterns tried when parsing a date from an HTTP header or API payload.
pub const HTTP_DATE_PATTERNS: [&str; 7] = [
    RFC_1123,
    RFC_850,
    ASCTIME,
    ISO_8601_DATE,
    ISO_8601_MINUTES,
    ISO_8601_SECONDS,
    ISO_8601_MILLIS,
];

/// Get the pattern for a well-known format name.
///
/// Names are matched case-insensitively; `-` and `_` are ignored.
///
/// # Examples
/// ```
/// use fmtcache::builtin_patterns::pattern_from_name;
///
/// assert_eq!(pattern_from_name("rfc1123"), Some(fmtcache::builtin_patterns::RFC_1123));
/// assert_eq!(pattern_from_name("ISO-8601-date"), Some("yyyy-MM-dd"));
/// assert_eq!(pattern_from_name("rfc3339"), None);
/// ```
pub fn pattern_from_name(name: &str) -> Option<&'static str> {
    let normalized: String = name
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match normalized.as_str() {
        "rfc1123" => Some(RFC_1123),
        "rfc850" => Some(RFC_850),
        "asctime" => Some(ASCTIME),
        "iso8601date" => Some(ISO_8601_DATE),
        "iso8601minutes" => Some(ISO_8601_MINUTES),
        "iso8601seconds" => Some(ISO_8601_SECONDS),
        "iso8601millis" => Some(ISO_8601_MILLIS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::DatePattern;

    #[test]
    fn test_all_builtin_patterns_compile() {
        for pattern in HTTP_DATE_PATTERNS {
            assert!(
                DatePattern::parse(pattern).is_ok(),
                "builtin pattern failed to compile: {}",
                pattern
            );
        }
    }
}
