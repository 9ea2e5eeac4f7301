use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;
use crate::value::Value;

/// Parser combinator that matches the first parser followed by the second.
///
/// Values are merged with [`Value::merge`], so chains of `Then` flatten into
/// a single tuple and `None`-valued parsers (literals, discards) vanish from
/// the result. Expectations accumulate additively: a success carries both
/// sides' pending expectations, and a failure of the second side still
/// reports what the first side could have extended into.
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<P1, P2> Parser for Then<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let (first_end, first_value, mut pending) =
            match self.first.parse(input, position, end, space) {
                ParseResult::Failure { expected } => return ParseResult::failure(expected),
                ParseResult::Success {
                    end: first_end,
                    value,
                    pending,
                } => (first_end, value, pending),
            };
        match self.second.parse(input, first_end, end, space) {
            ParseResult::Failure { expected } => {
                pending.extend(expected);
                ParseResult::failure(pending)
            }
            ParseResult::Success {
                end: second_end,
                value: second_value,
                pending: second_pending,
            } => {
                pending.extend(second_pending);
                ParseResult::success(
                    second_end,
                    Value::merge(first_value, second_value),
                    pending,
                )
            }
        }
    }

    fn railroad(&self) -> Component {
        Component::Then(vec![self.first.railroad(), self.second.railroad()])
    }
}

/// Convenience function to create a Then parser.
pub fn then<P1, P2>(first: P1, second: P2) -> Then<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    Then::new(first, second)
}
