use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;
use crate::value::Value;

/// Parser combinator that consumes exactly what its inner parser consumes
/// but always produces `None`.
///
/// Since sequencing treats `None` as its identity element, this is the tool
/// for neutralizing a branch's contribution to a merged value.
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<P> Parser for Discard<P>
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
            ParseResult::Success {
                end: stop, pending, ..
            } => ParseResult::success(stop, Value::None, pending),
            failure => failure,
        }
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Convenience function to create a Discard parser.
pub fn discard<P>(parser: P) -> Discard<P>
where
    P: Parser,
{
    Discard::new(parser)
}
