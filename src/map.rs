use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;
use crate::value::Value;

/// Parser combinator that transforms a successful value through a function.
///
/// The function is not called on failure. This is where raw matched text
/// becomes domain values: numbers, records, joined strings.
pub struct Map<P, F> {
    parser: P,
    function: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, function: F) -> Self {
        Map { parser, function }
    }
}

impl<P, F> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(Value) -> Value,
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
                end: stop,
                value,
                pending,
            } => ParseResult::success(stop, (self.function)(value), pending),
            failure => failure,
        }
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Convenience function to create a Map parser.
pub fn map<P, F>(parser: P, function: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(Value) -> Value,
{
    Map::new(parser, function)
}
