use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};
use crate::value::Value;
use crate::whitespace::skip_space;

pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ALPHA_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const ALPHANUM_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const WHITESPACE_CHARS: &str = " \t\r\n";

/// Parser that matches any single character and yields it.
pub struct AnyChar;

impl Parser for AnyChar {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        if position < end {
            ParseResult::success(
                position + 1,
                Value::Char(input[position] as char),
                vec![(position + 1, Expectation::Unsatisfiable)],
            )
        } else {
            ParseResult::fail_at(position, Expectation::AnyChar)
        }
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::Description, "any char")
    }
}

/// Parser that matches one character from the given set and yields it.
pub struct CharIn {
    set: Vec<u8>,
}

impl CharIn {
    pub fn new(set: impl AsRef<[u8]>) -> Self {
        CharIn {
            set: set.as_ref().to_vec(),
        }
    }
}

impl Parser for CharIn {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        if position < end && self.set.contains(&input[position]) {
            ParseResult::success(
                position + 1,
                Value::Char(input[position] as char),
                vec![(position + 1, Expectation::Unsatisfiable)],
            )
        } else {
            ParseResult::fail_at(position, Expectation::AnyCharIn(self.set.clone()))
        }
    }

    fn railroad(&self) -> Component {
        Component::token(
            TokenKind::Description,
            format!("any char in \"{}\"", String::from_utf8_lossy(&self.set)),
        )
    }
}

/// Parser that matches one character *not* in the given set and yields it.
pub struct CharNotIn {
    set: Vec<u8>,
}

impl CharNotIn {
    pub fn new(set: impl AsRef<[u8]>) -> Self {
        CharNotIn {
            set: set.as_ref().to_vec(),
        }
    }
}

impl Parser for CharNotIn {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        if position < end && !self.set.contains(&input[position]) {
            ParseResult::success(
                position + 1,
                Value::Char(input[position] as char),
                vec![(position + 1, Expectation::Unsatisfiable)],
            )
        } else {
            ParseResult::fail_at(position, Expectation::AnyCharNotIn(self.set.clone()))
        }
    }

    fn railroad(&self) -> Component {
        Component::token(
            TokenKind::Description,
            format!("any char not in \"{}\"", String::from_utf8_lossy(&self.set)),
        )
    }
}

/// Convenience function to create an AnyChar parser.
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Convenience function to create a CharIn parser.
pub fn char_in(set: impl AsRef<[u8]>) -> CharIn {
    CharIn::new(set)
}

/// Convenience function to create a CharNotIn parser.
pub fn char_not_in(set: impl AsRef<[u8]>) -> CharNotIn {
    CharNotIn::new(set)
}

/// Same as `char_in(DIGIT_CHARS)`.
pub fn digit() -> CharIn {
    CharIn::new(DIGIT_CHARS)
}

/// Same as `char_in(UPPER_CHARS)`.
pub fn upper() -> CharIn {
    CharIn::new(UPPER_CHARS)
}

/// Same as `char_in(LOWER_CHARS)`.
pub fn lower() -> CharIn {
    CharIn::new(LOWER_CHARS)
}

/// Same as `char_in(ALPHA_CHARS)`.
pub fn alpha() -> CharIn {
    CharIn::new(ALPHA_CHARS)
}

/// Same as `char_in(ALPHANUM_CHARS)`.
pub fn alphanum() -> CharIn {
    CharIn::new(ALPHANUM_CHARS)
}
