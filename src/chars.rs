use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};
use crate::value::Value;
use crate::whitespace::skip_space;

/// Parser that takes an exact number of characters as a raw byte run.
///
/// Whitespace is skipped once, before the first character; never between
/// characters. That makes this the primitive for fixed-width binary fields,
/// typically as the target of a bind on a length parser:
/// `bind(any_char(), |n| Box::new(chars(n.as_len().unwrap_or(0))))`.
pub struct Chars {
    count: usize,
}

impl Chars {
    pub fn new(count: usize) -> Self {
        Chars { count }
    }
}

impl Parser for Chars {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        let stop = position + self.count;
        if stop <= end {
            ParseResult::success(
                stop,
                Value::Bytes(input[position..stop].to_vec()),
                vec![(stop, Expectation::Unsatisfiable)],
            )
        } else {
            ParseResult::fail_at(
                position,
                Expectation::Custom(format!("{} characters", self.count).into()),
            )
        }
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::Description, format!("{} characters", self.count))
    }
}

/// Convenience function to create a Chars parser.
pub fn chars(count: usize) -> Chars {
    Chars::new(count)
}
