use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectation, ParseResult};

/// Parser combinator that restricts how far its inner parser may read.
///
/// The inner parser sees an `end` bound of `position + length`, clamped to
/// the real end of the window. This is the building block for fixed-width
/// binary fields.
pub struct Limit<P> {
    length: usize,
    parser: P,
}

impl<P> Limit<P> {
    pub fn new(length: usize, parser: P) -> Self {
        Limit { length, parser }
    }
}

impl<P> Parser for Limit<P>
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
        let bound = end.min(position + self.length);
        self.parser.parse(input, position, bound, space)
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Parser combinator for length-prefixed fields: the length parser runs
/// first, its value is read as a byte count, and the inner parser is then
/// bounded to that many bytes from where the length parser stopped.
pub struct DynamicLimit<L, P> {
    length: L,
    parser: P,
}

impl<L, P> DynamicLimit<L, P> {
    pub fn new(length: L, parser: P) -> Self {
        DynamicLimit { length, parser }
    }
}

impl<L, P> Parser for DynamicLimit<L, P>
where
    L: Parser,
    P: Parser,
{
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let (stop, value, pending) = match self.length.parse(input, position, end, space) {
            ParseResult::Success {
                end,
                value,
                pending,
            } => (end, value, pending),
            failure => return failure,
        };

        let Some(length) = value.as_len() else {
            return ParseResult::fail_at(stop, Expectation::Custom("a length".into()));
        };

        let bound = end.min(stop + length);
        match self.parser.parse(input, stop, bound, space) {
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
        Component::Then(vec![self.length.railroad(), self.parser.railroad()])
    }
}

/// Convenience function to create a fixed Limit parser.
pub fn limit<P>(length: usize, parser: P) -> Limit<P>
where
    P: Parser,
{
    Limit::new(length, parser)
}

/// Convenience function to create a DynamicLimit parser.
pub fn dynamic_limit<L, P>(length: L, parser: P) -> DynamicLimit<L, P>
where
    L: Parser,
    P: Parser,
{
    DynamicLimit::new(length, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{any_char, digit};
    use crate::invalid::Invalid;
    use crate::parser::ParserExt;
    use crate::repeat::one_or_more;
    use crate::value::Value;

    #[test]
    fn test_limit_clamps_end() {
        let parser = limit(2, one_or_more(any_char()));
        match parser.parse(b"abcdef", 0, 6, &Invalid) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 2);
                assert_eq!(value.text(), "ab");
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_limit_never_extends_the_window() {
        let parser = limit(10, one_or_more(any_char()));
        match parser.parse(b"abcdef", 0, 3, &Invalid) {
            ParseResult::Success { end, .. } => assert_eq!(end, 3),
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_dynamic_limit_reads_length_prefix() {
        // "3abcde": the digit says how many payload bytes follow.
        let parser = dynamic_limit(
            digit().map(|v| Value::Int(v.text().parse().unwrap_or(0))),
            one_or_more(any_char()),
        );
        match parser.parse(b"3abcde", 0, 6, &Invalid) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 4);
                assert_eq!(value.text(), "abc");
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_dynamic_limit_rejects_non_numeric_length() {
        // Char lengths are code points, so a string value is the shape
        // that does not read as a length.
        let bad = dynamic_limit(
            any_char().map(|_| Value::Str("x".into())),
            one_or_more(any_char()),
        );
        match bad.parse(b"abc", 0, 3, &Invalid) {
            ParseResult::Failure { expected } => {
                assert_eq!(
                    expected,
                    vec![(1, Expectation::Custom("a length".into()))]
                );
            }
            ParseResult::Success { .. } => panic!("expected failure"),
        }
    }
}
