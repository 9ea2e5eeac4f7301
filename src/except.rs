use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectation, ParseResult};

/// Parser combinator that matches as its inner parser does, unless the
/// avoid parser *also* matches at the same starting position.
///
/// The avoid parser is only tested, never consumed. The classic use is
/// `any_char().except(lit("*/"))` inside a comment body. The veto failure
/// carries a structured "none of X" expectation, where X is the avoided
/// parser's rendered railroad structure.
pub struct Except<P, A> {
    parser: P,
    avoid: A,
}

impl<P, A> Except<P, A> {
    pub fn new(parser: P, avoid: A) -> Self {
        Except { parser, avoid }
    }
}

impl<P, A> Parser for Except<P, A>
where
    P: Parser,
    A: Parser,
{
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let result = match self.parser.parse(input, position, end, space) {
            failure @ ParseResult::Failure { .. } => return failure,
            success => success,
        };
        if self.avoid.parse(input, position, end, space).is_success() {
            return ParseResult::fail_at(
                position,
                Expectation::NoneOf(self.avoid.railroad().to_string()),
            );
        }
        result
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Convenience function to create an Except parser.
pub fn except<P, A>(parser: P, avoid: A) -> Except<P, A>
where
    P: Parser,
    A: Parser,
{
    Except::new(parser, avoid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::any_char;
    use crate::invalid::Invalid;
    use crate::literal::lit;
    use crate::parser::ParserExt;
    use crate::value::Value;

    #[test]
    fn test_except_passes_when_avoid_fails() {
        let parser = any_char().except(lit("\""));
        match parser.parse(b"x", 0, 1, &Invalid) {
            ParseResult::Success { value, .. } => assert_eq!(value, Value::Char('x')),
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_except_vetoes_when_avoid_matches() {
        let parser = any_char().except(lit("*/"));
        match parser.parse(b"*/x", 0, 3, &Invalid) {
            ParseResult::Failure { expected } => {
                assert_eq!(
                    expected,
                    vec![(0, Expectation::NoneOf("\"*/\"".to_string()))]
                );
            }
            ParseResult::Success { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn test_except_propagates_inner_failure() {
        let parser = lit("ab").except(lit("xy"));
        match parser.parse(b"zz", 0, 2, &Invalid) {
            ParseResult::Failure { expected } => {
                assert_eq!(
                    expected,
                    vec![(0, Expectation::StringLiteral("ab".to_string()))]
                );
            }
            ParseResult::Success { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn test_except_does_not_consume_the_avoid_parser() {
        // '*' alone is fine; only "*/" is vetoed.
        let parser = any_char().except(lit("*/"));
        match parser.parse(b"*x", 0, 2, &Invalid) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 1);
                assert_eq!(value, Value::Char('*'));
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }
}
