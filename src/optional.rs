use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;
use crate::value::Value;

/// Parser combinator that never fails: a failure of the inner parser becomes
/// a zero-consumption success carrying the default value, with the inner
/// failure's expectations kept as pending. Those pending expectations are
/// what let the driver still say "a fraction could have followed here".
pub struct Optional<P> {
    parser: P,
    default: Value,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional {
            parser,
            default: Value::None,
        }
    }

    pub fn with_default(parser: P, default: Value) -> Self {
        Optional { parser, default }
    }
}

impl<P> Parser for Optional<P>
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
        match self.parser.parse(input, position, end, space) {
            ParseResult::Failure { expected } => {
                ParseResult::success(position, self.default.clone(), expected)
            }
            success => success,
        }
    }

    fn railroad(&self) -> Component {
        Component::Or(vec![self.parser.railroad(), Component::Nothing])
    }
}

/// Convenience function to create an Optional parser.
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}
