use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};
use crate::value::Value;

/// Parser combinator for negative lookahead.
///
/// Succeeds with `None`, consuming nothing, exactly when the inner parser
/// fails at the current position; fails with a structured "none of X"
/// expectation when it succeeds.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        match self.parser.parse(input, position, end, space) {
            ParseResult::Success { .. } => ParseResult::fail_at(
                position,
                Expectation::NoneOf(self.parser.railroad().to_string()),
            ),
            ParseResult::Failure { .. } => ParseResult::success(
                position,
                Value::None,
                vec![(position, Expectation::Unsatisfiable)],
            ),
        }
    }

    fn railroad(&self) -> Component {
        Component::token(
            TokenKind::Description,
            format!("anything but {}", self.parser.railroad()),
        )
    }
}

/// Convenience function to create a Not parser.
pub fn not<P>(parser: P) -> Not<P>
where
    P: Parser,
{
    Not::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invalid::Invalid;
    use crate::literal::lit;

    #[test]
    fn test_not_succeeds_when_inner_fails() {
        let parser = not(lit("else"));
        match parser.parse(b"endif", 0, 5, &Invalid) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 0);
                assert_eq!(value, Value::None);
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_not_fails_when_inner_matches() {
        let parser = not(lit("else"));
        match parser.parse(b"else", 0, 4, &Invalid) {
            ParseResult::Failure { expected } => {
                assert_eq!(
                    expected,
                    vec![(0, Expectation::NoneOf("\"else\"".to_string()))]
                );
            }
            ParseResult::Success { .. } => panic!("expected failure"),
        }
    }
}
