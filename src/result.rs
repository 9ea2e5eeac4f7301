use std::borrow::Cow;
use std::fmt;

/// Describes input that would have allowed a parse to succeed, or to consume
/// more input than it did. Expectations are always paired with the position
/// at which they apply; see [`Expectations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Nothing could help. Used both for true dead-ends and for successes
    /// that cannot be extended (a single-character match, for instance).
    /// Renders as "EOF".
    Unsatisfiable,
    /// A specific piece of literal text.
    StringLiteral(String),
    /// Input matching a regular expression.
    Regex(String),
    /// Any single character drawn from the given set.
    AnyCharIn(Vec<u8>),
    /// Any single character outside the given set.
    AnyCharNotIn(Vec<u8>),
    /// Any single character at all.
    AnyChar,
    /// A free-form description supplied by a combinator.
    Custom(Cow<'static, str>),
    /// Input *not* matching the described parser. Produced by the
    /// negative-lookahead combinators in place of a structured sibling.
    NoneOf(String),
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Unsatisfiable => write!(f, "EOF"),
            Expectation::StringLiteral(text) => write!(f, "\"{}\"", text),
            Expectation::Regex(pattern) => write!(f, "regex \"{}\"", pattern),
            Expectation::AnyCharIn(set) => {
                write!(f, "any char in \"{}\"", String::from_utf8_lossy(set))
            }
            Expectation::AnyCharNotIn(set) => {
                write!(f, "any char not in \"{}\"", String::from_utf8_lossy(set))
            }
            Expectation::AnyChar => write!(f, "any char"),
            Expectation::Custom(message) => write!(f, "{}", message),
            Expectation::NoneOf(description) => write!(f, "none of {}", description),
        }
    }
}

/// Positioned expectations, accumulated additively as results propagate
/// upward. Duplicates are collapsed by the driver when it formats a
/// diagnostic, not eagerly during parsing.
pub type Expectations = Vec<(usize, Expectation)>;

use crate::value::Value;

/// The outcome of a single `parse` call.
///
/// Failure is a value here, never a panic or an `Err`: backtracking works by
/// discarding a failed branch's result and trying the next alternative.
/// A success still carries `pending` expectations describing what would have
/// let it consume more input; alternation and sequencing merge these into
/// their own results so the driver can point at the most useful position.
#[derive(Debug, Clone)]
pub enum ParseResult {
    Success {
        /// Position just past the consumed input, where the next parser
        /// would start.
        end: usize,
        value: Value,
        pending: Expectations,
    },
    Failure {
        expected: Expectations,
    },
}

impl ParseResult {
    pub fn success(end: usize, value: Value, pending: Expectations) -> Self {
        ParseResult::Success {
            end,
            value,
            pending,
        }
    }

    pub fn failure(expected: Expectations) -> Self {
        ParseResult::Failure { expected }
    }

    /// Failure with a single positioned expectation.
    pub fn fail_at(position: usize, expectation: Expectation) -> Self {
        ParseResult::Failure {
            expected: vec![(position, expectation)],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// The expectation list of either variant.
    pub fn expectations(&self) -> &Expectations {
        match self {
            ParseResult::Success { pending, .. } => pending,
            ParseResult::Failure { expected } => expected,
        }
    }
}
