use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectations, ParseResult};

/// Parser combinator that tries all of its alternatives and returns the
/// success with the greatest end position (the earliest listed wins a tie).
/// Fails only when every alternative fails, with the union of their
/// expectations.
pub struct Longest {
    parsers: Vec<Box<dyn Parser>>,
}

impl Longest {
    pub fn new(parser: impl Parser + 'static) -> Self {
        Longest {
            parsers: vec![Box::new(parser)],
        }
    }

    /// Appends another alternative.
    pub fn or(mut self, parser: impl Parser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }
}

impl Parser for Longest {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let mut expected = Expectations::new();
        let mut best: Option<ParseResult> = None;
        for parser in &self.parsers {
            match parser.parse(input, position, end, space) {
                ParseResult::Failure { expected: branch } => expected.extend(branch),
                ParseResult::Success {
                    end: stop,
                    value,
                    pending,
                } => {
                    let better = match &best {
                        Some(ParseResult::Success { end: best_end, .. }) => stop > *best_end,
                        _ => true,
                    };
                    if better {
                        best = Some(ParseResult::success(stop, value, pending));
                    }
                }
            }
        }
        best.unwrap_or(ParseResult::Failure { expected })
    }

    fn railroad(&self) -> Component {
        Component::Or(self.parsers.iter().map(|p| p.railroad()).collect())
    }
}

/// Convenience function to create a Longest parser.
pub fn longest(parser: impl Parser + 'static) -> Longest {
    Longest::new(parser)
}
