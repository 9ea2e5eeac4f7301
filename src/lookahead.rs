use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectation, ParseResult};
use crate::value::Value;

/// Zero-width positive lookahead: matches when the inner parser matches,
/// but consumes nothing and yields `None`.
pub struct Present<P> {
    parser: P,
}

impl<P> Present<P> {
    pub fn new(parser: P) -> Self {
        Present { parser }
    }
}

impl<P> Parser for Present<P>
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
            ParseResult::Success { .. } => ParseResult::success(
                position,
                Value::None,
                vec![(position, Expectation::Unsatisfiable)],
            ),
            failure => failure,
        }
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Zero-width positive lookahead that keeps the inner parser's value.
pub struct Preserve<P> {
    parser: P,
}

impl<P> Preserve<P> {
    pub fn new(parser: P) -> Self {
        Preserve { parser }
    }
}

impl<P> Parser for Preserve<P>
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
            ParseResult::Success { value, pending, .. } => {
                ParseResult::success(position, value, pending)
            }
            failure => failure,
        }
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Convenience function to create a Present parser.
pub fn present<P>(parser: P) -> Present<P>
where
    P: Parser,
{
    Present::new(parser)
}

/// Convenience function to create a Preserve parser.
pub fn preserve<P>(parser: P) -> Preserve<P>
where
    P: Parser,
{
    Preserve::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invalid::Invalid;
    use crate::literal::sig_lit;
    use crate::parser::ParserExt;

    #[test]
    fn test_present_does_not_advance() {
        let parser = present(sig_lit("ab"));
        match parser.parse(b"ab", 0, 2, &Invalid) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 0);
                assert_eq!(value, Value::None);
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_present_fails_when_inner_fails() {
        let parser = present(sig_lit("ab"));
        assert!(!parser.parse(b"xy", 0, 2, &Invalid).is_success());
    }

    #[test]
    fn test_preserve_keeps_the_value_without_advancing() {
        let parser = preserve(sig_lit("ab"));
        match parser.parse(b"ab", 0, 2, &Invalid) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 0);
                assert_eq!(value, Value::Str("ab".to_string()));
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_lookahead_composes_with_then() {
        // Match "ab" only when followed by "c", without consuming the "c".
        let parser = sig_lit("ab").then(present(sig_lit("c")));
        match parser.parse(b"abc", 0, 3, &Invalid) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 2);
                assert_eq!(value, Value::Str("ab".to_string()));
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
        assert!(!parser.parse(b"abd", 0, 3, &Invalid).is_success());
    }
}
