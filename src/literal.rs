use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};
use crate::value::Value;
use crate::whitespace::skip_space;

/// Parser that matches a literal piece of text and produces `None`.
///
/// Producing `None` makes literals disappear under sequencing's merge rule,
/// which is usually what punctuation wants. Use [`SignificantLiteral`] when
/// the matched text itself is the value.
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }
}

fn match_literal(input: &[u8], position: usize, end: usize, text: &str) -> Option<usize> {
    let stop = position + text.len();
    if stop <= end && &input[position..stop] == text.as_bytes() {
        Some(stop)
    } else {
        None
    }
}

impl Parser for Literal {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        match match_literal(input, position, end, &self.text) {
            Some(stop) => {
                ParseResult::success(stop, Value::None, vec![(stop, Expectation::Unsatisfiable)])
            }
            None => ParseResult::fail_at(position, Expectation::StringLiteral(self.text.clone())),
        }
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::Text, self.text.clone())
    }
}

/// Like [`Literal`], but the matched text is the value.
pub struct SignificantLiteral {
    text: String,
}

impl SignificantLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        SignificantLiteral { text: text.into() }
    }
}

impl Parser for SignificantLiteral {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        match match_literal(input, position, end, &self.text) {
            Some(stop) => ParseResult::success(
                stop,
                Value::Str(self.text.clone()),
                vec![(stop, Expectation::Unsatisfiable)],
            ),
            None => ParseResult::fail_at(position, Expectation::StringLiteral(self.text.clone())),
        }
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::Text, self.text.clone())
    }
}

/// ASCII case-insensitive [`Literal`]. Produces `None`, like `Literal`.
pub struct AnyCase {
    text: String,
}

impl AnyCase {
    pub fn new(text: impl Into<String>) -> Self {
        AnyCase { text: text.into() }
    }
}

impl Parser for AnyCase {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        let stop = position + self.text.len();
        if stop <= end && input[position..stop].eq_ignore_ascii_case(self.text.as_bytes()) {
            ParseResult::success(stop, Value::None, vec![(stop, Expectation::Unsatisfiable)])
        } else {
            ParseResult::fail_at(position, Expectation::StringLiteral(self.text.clone()))
        }
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::AnyCase, self.text.clone())
    }
}

/// Convenience function to create a Literal parser.
pub fn lit(text: impl Into<String>) -> Literal {
    Literal::new(text)
}

/// Convenience function to create a SignificantLiteral parser.
pub fn sig_lit(text: impl Into<String>) -> SignificantLiteral {
    SignificantLiteral::new(text)
}

/// Convenience function to create an AnyCase parser.
pub fn any_case(text: impl Into<String>) -> AnyCase {
    AnyCase::new(text)
}
