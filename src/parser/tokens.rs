//! Token types for the pattern lexer.

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of one repeated ASCII letter, e.g. `yyyy` → `Field { letter: 'y', count: 4 }`
    Field { letter: char, count: usize },
    /// Text inside single quotes, or a lone `''`
    Quoted(String),
    /// Any other character
    Literal(char),

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
