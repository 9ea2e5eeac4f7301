use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectations, ParseResult};
use crate::value::Value;

/// Parser combinator that applies its inner parser repeatedly, collecting
/// the values into a list.
///
/// Iterates rather than recurses, so repetition depth never grows the call
/// stack. Stops at `max` applications or at the first failure; succeeds only
/// if at least `min` applications succeeded, and carries the last attempt's
/// expectations so the driver can explain why the repetition stopped. A
/// `max` of zero short-circuits to an empty success, and a zero-width inner
/// success ends the loop (it would otherwise never terminate).
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        Repeat { parser, min, max }
    }
}

impl<P> Parser for Repeat<P>
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
        let mut items = Vec::new();
        let mut stop = position;
        let mut pending = Expectations::new();
        loop {
            if self.max.is_some_and(|max| items.len() >= max) {
                break;
            }
            match self.parser.parse(input, stop, end, space) {
                ParseResult::Success {
                    end: next,
                    value,
                    pending: item_pending,
                } => {
                    items.push(value);
                    pending = item_pending;
                    if next == stop {
                        break;
                    }
                    stop = next;
                }
                ParseResult::Failure { expected } => {
                    pending = expected;
                    break;
                }
            }
        }
        if items.len() < self.min {
            return ParseResult::failure(pending);
        }
        ParseResult::success(stop, Value::List(items), pending)
    }

    fn railroad(&self) -> Component {
        let looped = Component::Loop {
            body: Box::new(self.parser.railroad()),
            delimiter: Box::new(Component::Nothing),
        };
        if self.min == 0 {
            Component::Or(vec![looped, Component::Nothing])
        } else {
            looped
        }
    }
}

/// Convenience function to create a Repeat parser.
pub fn repeat<P>(parser: P, min: usize, max: Option<usize>) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, min, max)
}

/// Matches the parser any number of times, including zero. Never fails.
pub fn zero_or_more<P>(parser: P) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, 0, None)
}

/// Matches the parser as many times as possible, requiring at least one.
pub fn one_or_more<P>(parser: P) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, 1, None)
}
