use std::rc::Rc;

use crate::discard::Discard;
use crate::error::{ParseError, diagnose};
use crate::except::Except;
use crate::first::First;
use crate::map::Map;
use crate::optional::Optional;
use crate::railroad::Component;
use crate::repeat::Repeat;
use crate::result::{Expectation, ParseResult};
use crate::then::Then;
use crate::value::Value;
use crate::whitespace::{Whitespace, skip_space};

/// Core parser trait for parser combinators.
///
/// A parser observes `input` between `position` and `end` (the active window;
/// a bounding combinator may narrow `end` below `input.len()`) and returns a
/// [`ParseResult`]. Failure is a returned value, never a panic: backtracking
/// works by discarding a failed branch's result and retrying elsewhere, and
/// nothing is mutated in place.
///
/// `space` is the ambient whitespace parser, threaded as an explicit argument
/// so subtrees can substitute their own (see `Exact`); every leaf matcher
/// runs it to exhaustion before attempting its own match.
pub trait Parser {
    fn parse(&self, input: &[u8], position: usize, end: usize, space: &dyn Parser)
    -> ParseResult;

    /// The structural railroad-diagram representation of this parser.
    /// Combinators with nothing useful to show keep the default opaque
    /// bullet.
    fn railroad(&self) -> Component {
        Component::Bullet
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        (**self).parse(input, position, end, space)
    }

    fn railroad(&self) -> Component {
        (**self).railroad()
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        (**self).parse(input, position, end, space)
    }

    fn railroad(&self) -> Component {
        (**self).railroad()
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        (**self).parse(input, position, end, space)
    }

    fn railroad(&self) -> Component {
        (**self).railroad()
    }
}

/// Fluent builders and top-level entry points, available on every parser.
///
/// The builders are construction-time sugar over the combinator
/// constructors; promotion of bare strings happens explicitly through
/// `lit` and friends rather than implicitly at parse time.
pub trait ParserExt: Parser + Sized {
    /// Sequence: this parser, then `second`, merging values under the
    /// canonical tuple-flattening rule.
    fn then<P: Parser>(self, second: P) -> Then<Self, P> {
        Then::new(self, second)
    }

    /// Ordered choice: this parser, else `other`. Chains flatten into a
    /// single alternative list.
    fn or<P: Parser + 'static>(self, other: P) -> First
    where
        Self: 'static,
    {
        First::new(self).or(other)
    }

    /// Passes a successful value through `function`.
    fn map<F>(self, function: F) -> Map<Self, F>
    where
        F: Fn(Value) -> Value,
    {
        Map::new(self, function)
    }

    /// Same consumption, value always `None`.
    fn discard(self) -> Discard<Self> {
        Discard::new(self)
    }

    /// Succeeds with `None` and no consumption when this parser fails.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Applies this parser between `min` and `max` times, collecting the
    /// values into a list. `None` for `max` means unbounded.
    fn repeat(self, min: usize, max: Option<usize>) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }

    /// Succeeds as this parser unless `avoid` also matches at the same
    /// starting position.
    fn except<A: Parser>(self, avoid: A) -> Except<Self, A> {
        Except::new(self, avoid)
    }

    /// Parses an entire string with the default whitespace parser, requiring
    /// the whole input to be consumed.
    fn parse_string(&self, input: &str) -> Result<Value, ParseError> {
        self.parse_bytes_with(input.as_bytes(), true, &Whitespace)
    }

    /// Parses a string with explicit control over full-consumption checking
    /// and the whitespace parser.
    fn parse_string_with(
        &self,
        input: &str,
        all: bool,
        space: &dyn Parser,
    ) -> Result<Value, ParseError> {
        self.parse_bytes_with(input.as_bytes(), all, space)
    }

    /// Byte-input counterpart of [`ParserExt::parse_string`].
    fn parse_bytes(&self, input: &[u8]) -> Result<Value, ParseError> {
        self.parse_bytes_with(input, true, &Whitespace)
    }

    /// The full-control driver. Parses from position 0; on success with
    /// `all` set, trailing whitespace is consumed and the final position
    /// must reach the end of input, otherwise the pending expectations plus
    /// an end-of-input expectation become the diagnostic.
    fn parse_bytes_with(
        &self,
        input: &[u8],
        all: bool,
        space: &dyn Parser,
    ) -> Result<Value, ParseError> {
        match self.parse(input, 0, input.len(), space) {
            ParseResult::Success {
                end,
                value,
                pending,
            } => {
                if all {
                    let stopped = skip_space(input, end, input.len(), space);
                    if stopped != input.len() {
                        let mut expected = pending;
                        expected.push((stopped, Expectation::Custom("end of input".into())));
                        return Err(diagnose(&expected));
                    }
                }
                Ok(value)
            }
            ParseResult::Failure { expected } => Err(diagnose(&expected)),
        }
    }
}

impl<P: Parser> ParserExt for P {}
