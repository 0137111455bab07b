//! Error types for pattern compilation and date parsing.

use thiserror::Error;

/// Errors that can occur when compiling a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty date pattern")]
    EmptyPattern,

    #[error("unterminated quote at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("unknown field letter '{letter}' at position {position}")]
    UnknownField { position: usize, letter: char },

    #[error("field '{letter}' at position {position} is too wide (maximum {max})")]
    FieldTooWide {
        position: usize,
        letter: char,
        max: usize,
    },
}

/// Errors that can occur when parsing text with a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("unexpected end of input at position {position}: expected {expected}")]
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },

    #[error("expected '{expected}' at position {position}")]
    LiteralMismatch { position: usize, expected: char },

    #[error("invalid {field} at position {position}")]
    InvalidNumber {
        position: usize,
        field: &'static str,
    },

    #[error("unrecognized {field} name at position {position}")]
    UnknownName {
        position: usize,
        field: &'static str,
    },

    #[error("invalid time zone offset at position {position}")]
    InvalidOffset { position: usize },

    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("local time does not exist in the configured time zone")]
    NonexistentLocalTime,
}

/// Errors returned by the date helper functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Parse(#[from] DateParseError),
}
