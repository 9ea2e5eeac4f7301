use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;
use crate::value::Value;

/// Monadic composition: run a parser, hand its value to a function, and run
/// the parser that function returns from where the first one stopped.
///
/// The overall value is the second parser's value. This is what
/// length-prefixed fields need, where the shape of the payload parser
/// depends on an already-parsed value.
pub struct Bind<P, F> {
    parser: P,
    function: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, function: F) -> Self {
        Bind { parser, function }
    }
}

impl<P, F> Parser for Bind<P, F>
where
    P: Parser,
    F: Fn(Value) -> Box<dyn Parser>,
{
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let (stop, value, pending) = match self.parser.parse(input, position, end, space) {
            ParseResult::Success {
                end,
                value,
                pending,
            } => (end, value, pending),
            failure => return failure,
        };

        let second = (self.function)(value);
        match second.parse(input, stop, end, space) {
            ParseResult::Success {
                end,
                value,
                pending: mut inner,
            } => {
                let mut expected = pending;
                expected.append(&mut inner);
                ParseResult::Success {
                    end,
                    value,
                    pending: expected,
                }
            }
            ParseResult::Failure { mut expected } => {
                let mut merged = pending;
                merged.append(&mut expected);
                ParseResult::Failure { expected: merged }
            }
        }
    }

    fn railroad(&self) -> Component {
        Component::Then(vec![self.parser.railroad(), Component::Bullet])
    }
}

/// Convenience function to create a Bind parser.
pub fn bind<P, F>(parser: P, function: F) -> Bind<P, F>
where
    P: Parser,
    F: Fn(Value) -> Box<dyn Parser>,
{
    Bind::new(parser, function)
}
