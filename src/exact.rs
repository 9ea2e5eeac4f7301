use crate::invalid::Invalid;
use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;
use crate::whitespace::skip_space;

/// Parser combinator that creates a whitespace island.
///
/// Whitespace is skipped once with the ambient space parser, and then the
/// inner parser runs with a replacement space parser — by default `Invalid`,
/// which suppresses all skipping. Without this, a string-literal rule inside
/// a whitespace-insignificant grammar would silently lose its interior
/// spaces to the ambient skipper.
pub struct Exact<P> {
    parser: P,
    island: Box<dyn Parser>,
}

impl<P> Exact<P> {
    pub fn new(parser: P) -> Self {
        Exact {
            parser,
            island: Box::new(Invalid),
        }
    }

    /// Replaces the island's space parser instead of suppressing skipping
    /// entirely.
    pub fn island(mut self, space: impl Parser + 'static) -> Self {
        self.island = Box::new(space);
        self
    }
}

impl<P> Parser for Exact<P>
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
        let position = skip_space(input, position, end, space);
        self.parser.parse(input, position, end, self.island.as_ref())
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Convenience function to create an Exact parser.
pub fn exact<P>(parser: P) -> Exact<P>
where
    P: Parser,
{
    Exact::new(parser)
}
