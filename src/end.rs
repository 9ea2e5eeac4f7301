use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectation, ParseResult};
use crate::value::Value;
use crate::whitespace::skip_space;

/// Parser that matches only at the end of the active window.
///
/// Whitespace is skipped first; the parser then succeeds with value `None`
/// iff the resulting position equals `end`. `consume` controls whether the
/// skipped whitespace is reflected in the returned position.
pub struct End {
    consume: bool,
}

impl End {
    pub fn new() -> Self {
        End { consume: true }
    }

    pub fn consume(mut self, consume: bool) -> Self {
        self.consume = consume;
        self
    }
}

impl Default for End {
    fn default() -> Self {
        End::new()
    }
}

impl Parser for End {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let skipped = skip_space(input, position, end, space);
        if skipped == end {
            let stop = if self.consume { skipped } else { position };
            ParseResult::success(stop, Value::None, vec![])
        } else {
            ParseResult::fail_at(skipped, Expectation::Unsatisfiable)
        }
    }

    fn railroad(&self) -> Component {
        Component::Nothing
    }
}

/// Convenience function to create an End parser.
pub fn end() -> End {
    End::new()
}
