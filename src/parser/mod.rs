//! Parser for LDML date patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{
    DatePattern, Field, HourCycle, IsoZone, MonthForm, PatternPart, TextWidth, ZoneStyle,
};
use crate::error::PatternError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Maximum digits for a fractional second (nanosecond precision).
const MAX_FRACTION_DIGITS: usize = 9;

/// Widest numeric field accepted (`yyyyyyyyy`).
const MAX_NUMERIC_WIDTH: usize = 9;

/// Parse a pattern string into a DatePattern.
pub fn parse(pattern: &str) -> Result<DatePattern, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut parser = Parser::new(pattern)?;
    parser.parse()
}

/// Parser for pattern strings.
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current token
    current: SpannedToken,
    /// Literal text accumulated since the last field
    pending_literal: String,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    fn new(pattern: &'a str) -> Result<Self, PatternError> {
        let mut lexer = Lexer::new(pattern);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            pending_literal: String::new(),
        })
    }

    /// Advance to the next token.
    fn advance(&mut self) -> Result<(), PatternError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Parse the whole pattern, merging adjacent literal tokens.
    fn parse(&mut self) -> Result<DatePattern, PatternError> {
        let mut parts = Vec::new();

        loop {
            match &self.current.token {
                Token::Eof => break,
                Token::Literal(ch) => {
                    self.pending_literal.push(*ch);
                }
                Token::Quoted(text) => {
                    self.pending_literal.push_str(text);
                }
                Token::Field { letter, count } => {
                    let field = field_for(*letter, *count, self.current.start)?;
                    self.flush_literal(&mut parts);
                    parts.push(PatternPart::Field(field));
                }
            }
            self.advance()?;
        }

        self.flush_literal(&mut parts);
        Ok(DatePattern::from_parts(parts))
    }

    fn flush_literal(&mut self, parts: &mut Vec<PatternPart>) {
        if !self.pending_literal.is_empty() {
            parts.push(PatternPart::Literal(std::mem::take(&mut self.pending_literal)));
        }
    }
}

/// Map a letter run to its field.
fn field_for(letter: char, count: usize, position: usize) -> Result<Field, PatternError> {
    let width = |max: usize| -> Result<u8, PatternError> {
        if count > max {
            Err(PatternError::FieldTooWide {
                position,
                letter,
                max,
            })
        } else {
            Ok(count as u8)
        }
    };

    let field = match letter {
        'G' => Field::Era(text_width(count)),
        'y' => Field::Year(width(MAX_NUMERIC_WIDTH)?),
        'M' | 'L' => match count {
            1 | 2 => Field::Month(MonthForm::Numeric(count as u8)),
            3 => Field::Month(MonthForm::Text(TextWidth::Abbreviated)),
            4 => Field::Month(MonthForm::Text(TextWidth::Wide)),
            _ => Field::Month(MonthForm::Text(TextWidth::Narrow)),
        },
        'd' => Field::Day(width(2)?),
        'D' => Field::DayOfYear(width(3)?),
        'E' => Field::Weekday(text_width(count)),
        'a' => Field::DayPeriod,
        'H' => hour(HourCycle::H23, width(2)?),
        'h' => hour(HourCycle::H12, width(2)?),
        'K' => hour(HourCycle::H11, width(2)?),
        'k' => hour(HourCycle::H24, width(2)?),
        'm' => Field::Minute(width(2)?),
        's' => Field::Second(width(2)?),
        'S' => Field::FractionalSecond(width(MAX_FRACTION_DIGITS)?),
        'z' => match count {
            1..=3 => Field::Zone(ZoneStyle::GmtShort),
            _ => Field::Zone(ZoneStyle::GmtLong),
        },
        'Z' => match count {
            1..=3 => Field::Zone(iso(false, false, false)),
            4 => Field::Zone(ZoneStyle::GmtLong),
            _ => Field::Zone(iso(true, false, true)),
        },
        'x' | 'X' => {
            let utc_designator = letter == 'X';
            match count {
                1 => Field::Zone(iso(false, true, utc_designator)),
                2 | 4 => Field::Zone(iso(false, false, utc_designator)),
                3 | 5 => Field::Zone(iso(true, false, utc_designator)),
                _ => {
                    return Err(PatternError::FieldTooWide {
                        position,
                        letter,
                        max: 5,
                    })
                }
            }
        }
        _ => return Err(PatternError::UnknownField { position, letter }),
    };

    Ok(field)
}

fn text_width(count: usize) -> TextWidth {
    match count {
        1..=3 => TextWidth::Abbreviated,
        4 => TextWidth::Wide,
        _ => TextWidth::Narrow,
    }
}

fn hour(cycle: HourCycle, width: u8) -> Field {
    Field::Hour { cycle, width }
}

fn iso(extended: bool, optional_minutes: bool, utc_designator: bool) -> ZoneStyle {
    ZoneStyle::Iso(IsoZone {
        extended,
        optional_minutes,
        utc_designator,
    })
}
