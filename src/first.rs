use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectations, ParseResult};

/// Parser combinator that tries its alternatives in order and returns the
/// first success, regardless of how much later alternatives might have
/// consumed. If every alternative fails, the failure carries the union of
/// all their expectations.
pub struct First {
    parsers: Vec<Box<dyn Parser>>,
}

impl First {
    pub fn new(parser: impl Parser + 'static) -> Self {
        First {
            parsers: vec![Box::new(parser)],
        }
    }

    /// Appends another alternative; chains of `.or` build one flat list.
    pub fn or(mut self, parser: impl Parser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }
}

impl Parser for First {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let mut expected = Expectations::new();
        for parser in &self.parsers {
            match parser.parse(input, position, end, space) {
                ParseResult::Failure { expected: branch } => expected.extend(branch),
                success => return success,
            }
        }
        ParseResult::failure(expected)
    }

    fn railroad(&self) -> Component {
        Component::Or(self.parsers.iter().map(|p| p.railroad()).collect())
    }
}

/// Convenience function to create a First parser.
pub fn first(parser: impl Parser + 'static) -> First {
    First::new(parser)
}
