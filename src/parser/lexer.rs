//! Lexer for tokenizing date pattern strings.
//!
//! The lexer converts LDML pattern strings into a stream of tokens that can be
//! processed by the parser. It handles:
//! - Runs of the same ASCII letter (`yyyy`, `MM`) become a single Field token
//! - Quoted text (`'T'`, `'o''clock'`) becomes a Quoted token
//! - Two adjacent quotes (`''`) outside quoted text become a literal quote
//! - Everything else is a Literal token

use crate::error::PatternError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '\'' => self.lex_quoted()?,
            c if c.is_ascii_alphabetic() => {
                let count = self.count_run(|other| other == c);
                Token::Field { letter: c, count }
            }
            _ => {
                self.advance();
                Token::Literal(ch)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    /// Returns the count (always >= 1 since current char matches).
    #[inline]
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes quoted text ('...'). A doubled quote inside yields one quote.
    fn lex_quoted(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        // '' outside quoted text is an escaped quote
        if self.current_char() == Some('\'') {
            self.advance();
            return Ok(Token::Quoted("'".to_string()));
        }

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    if self.current_char() == Some('\'') {
                        content.push('\'');
                        self.advance();
                    } else {
                        return Ok(Token::Quoted(content));
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(PatternError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Returns all remaining tokens as a vector.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, PatternError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
