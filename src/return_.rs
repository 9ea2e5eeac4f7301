use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectation, ParseResult};
use crate::value::Value;

/// Parser that always succeeds with a fixed value, consuming nothing.
///
/// The zero-consumption identity element of sequencing, and the companion
/// of [`crate::bind::Bind`]: a bind function with nothing left to parse
/// returns `ret(value)` to inject a computed value back into the chain.
pub struct Return {
    value: Value,
}

impl Return {
    pub fn new(value: Value) -> Self {
        Return { value }
    }
}

impl Parser for Return {
    fn parse(
        &self,
        _input: &[u8],
        position: usize,
        _end: usize,
        _space: &dyn Parser,
    ) -> ParseResult {
        ParseResult::success(
            position,
            self.value.clone(),
            vec![(position, Expectation::Unsatisfiable)],
        )
    }

    fn railroad(&self) -> Component {
        Component::Nothing
    }
}

/// Convenience function to create a Return parser.
pub fn ret(value: Value) -> Return {
    Return::new(value)
}
