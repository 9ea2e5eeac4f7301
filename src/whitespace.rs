use crate::charset::WHITESPACE_CHARS;
use crate::invalid::Invalid;
use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};
use crate::value::Value;

/// The default whitespace parser: a single space, tab, carriage return, or
/// newline. The repetition comes from [`skip_space`], which applies the
/// ambient space parser to exhaustion, so one character per application is
/// all this needs to match.
pub struct Whitespace;

impl Parser for Whitespace {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        _space: &dyn Parser,
    ) -> ParseResult {
        if position < end && WHITESPACE_CHARS.as_bytes().contains(&input[position]) {
            ParseResult::success(
                position + 1,
                Value::Char(input[position] as char),
                vec![(position + 1, Expectation::Unsatisfiable)],
            )
        } else {
            ParseResult::fail_at(
                position,
                Expectation::AnyCharIn(WHITESPACE_CHARS.as_bytes().to_vec()),
            )
        }
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::Description, "whitespace")
    }
}

/// Convenience function to create the default whitespace parser.
pub fn whitespace() -> Whitespace {
    Whitespace
}

/// The whitespace protocol: repeatedly applies `space` starting at
/// `position` until it stops matching, returning where it stopped. Each
/// application receives `Invalid` as its own space parser, which is what
/// keeps the protocol from recursing into itself. A zero-width space match
/// ends the loop, since it would otherwise never stop.
pub fn skip_space(input: &[u8], position: usize, end: usize, space: &dyn Parser) -> usize {
    let mut position = position;
    loop {
        match space.parse(input, position, end, &Invalid) {
            ParseResult::Success { end: next, .. } => {
                if next == position {
                    return position;
                }
                position = next;
            }
            ParseResult::Failure { .. } => return position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::lit;

    #[test]
    fn test_whitespace_matches_one_char() {
        let result = Whitespace.parse(b" \t x", 0, 4, &Invalid);
        match result {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 1);
                assert_eq!(value, Value::Char(' '));
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_skip_space_consumes_a_run() {
        assert_eq!(skip_space(b" \t\n\rx", 0, 5, &Whitespace), 4);
        assert_eq!(skip_space(b"x  ", 0, 3, &Whitespace), 0);
        assert_eq!(skip_space(b"   ", 0, 3, &Whitespace), 3);
    }

    #[test]
    fn test_skip_space_respects_the_end_bound() {
        assert_eq!(skip_space(b"    x", 0, 2, &Whitespace), 2);
    }

    #[test]
    fn test_skip_space_with_invalid_is_a_no_op() {
        assert_eq!(skip_space(b"   x", 0, 4, &Invalid), 0);
    }

    #[test]
    fn test_skip_space_stops_on_zero_width_match() {
        // A pathological space parser that succeeds without consuming.
        let zero_width = lit("");
        assert_eq!(skip_space(b"abc", 1, 3, &zero_width), 1);
    }

    #[test]
    fn test_custom_space_parser() {
        // Comments as whitespace: any run of ';' characters.
        let comment = crate::charset::char_in(";");
        assert_eq!(skip_space(b";;;x", 0, 4, &comment), 3);
    }
}
