use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};

/// A parser that never matches and always fails with an unsatisfiable
/// expectation.
///
/// Besides being the zero element of alternation, this is the whitespace
/// parser that suppresses whitespace skipping: passing `Invalid` as the
/// ambient space parser makes every skip a no-op. It must never invoke the
/// whitespace protocol itself, since it is what the protocol uses to stop
/// its own recursion.
pub struct Invalid;

impl Parser for Invalid {
    fn parse(
        &self,
        _input: &[u8],
        position: usize,
        _end: usize,
        _space: &dyn Parser,
    ) -> ParseResult {
        ParseResult::fail_at(position, Expectation::Unsatisfiable)
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::Description, "nothing valid")
    }
}

/// Convenience function to create an Invalid parser.
pub fn invalid() -> Invalid {
    Invalid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_always_fails() {
        let result = Invalid.parse(b"anything", 0, 8, &Invalid);
        assert!(!result.is_success());
        assert_eq!(
            result.expectations(),
            &vec![(0, Expectation::Unsatisfiable)]
        );
    }

    #[test]
    fn test_invalid_fails_at_the_given_position() {
        let result = Invalid.parse(b"abc", 2, 3, &Invalid);
        assert_eq!(result.expectations(), &vec![(2, Expectation::Unsatisfiable)]);
    }
}
