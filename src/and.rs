use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;

/// Parser combinator that matches as its inner parser does, but only if the
/// check parser *also* matches at the same starting position.
///
/// The check parser is tested without being consumed; on a failed check the
/// combinator fails with the check's own expectations.
pub struct And<P, C> {
    parser: P,
    check: C,
}

impl<P, C> And<P, C> {
    pub fn new(parser: P, check: C) -> Self {
        And { parser, check }
    }
}

impl<P, C> Parser for And<P, C>
where
    P: Parser,
    C: Parser,
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
        match self.check.parse(input, position, end, space) {
            ParseResult::Failure { expected } => ParseResult::failure(expected),
            ParseResult::Success { .. } => result,
        }
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Convenience function to create an And parser.
pub fn and<P, C>(parser: P, check: C) -> And<P, C>
where
    P: Parser,
    C: Parser,
{
    And::new(parser, check)
}
