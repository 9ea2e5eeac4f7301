//! # Parsely - Parser Combinator Library
//!
//! A parser combinator library for whitespace-aware grammars over byte
//! input, with accumulated-expectation error reporting and railroad-diagram
//! extraction.
//!
//! Parsely provides composable parsers that combine into larger ones from
//! simple building blocks. The library emphasizes:
//!
//! - **Failure is a value**: a failed branch returns an ordinary
//!   [`ParseResult`] for backtracking to discard; only the driver surfaces
//!   an `Err`, and panics are reserved for construction errors
//! - **Rich error reporting**: Failures from every attempted branch are
//!   pooled and reduced to a single "At position N: expected one of ..."
//!   diagnostic at the furthest point reached
//! - **Whitespace as a parser**: The skipper is an ordinary parser threaded
//!   through every call, replaceable per subtree
//! - **Dynamic values**: Parsers produce [`Value`]s that merge under a
//!   tuple-flattening rule, so sequencing reads naturally
//!
//! ```
//! use parsely::{ParserExt, Value, digit, lit};
//!
//! let number = digit()
//!     .repeat(1, None)
//!     .map(|v| Value::Int(v.text().parse().unwrap()));
//! let pair = lit("(")
//!     .then(&number)
//!     .then(lit(","))
//!     .then(&number)
//!     .then(lit(")"));
//!
//! let value = pair.parse_string("( 1 , 23 )").unwrap();
//! assert_eq!(value, Value::Tuple(vec![Value::Int(1), Value::Int(23)]));
//! ```

pub mod and;
pub mod bind;
pub mod chars;
pub mod charset;
pub mod discard;
pub mod end;
pub mod error;
pub mod exact;
pub mod except;
pub mod first;
pub mod forward;
pub mod infix;
pub mod invalid;
pub mod keyword;
pub mod limit;
pub mod literal;
pub mod longest;
pub mod lookahead;
pub mod map;
pub mod not;
pub mod optional;
pub mod parser;
pub mod railroad;
pub mod regexp;
pub mod repeat;
pub mod result;
pub mod return_;
pub mod then;
pub mod value;
pub mod whitespace;
pub mod word;

pub use and::{And, and};
pub use bind::{Bind, bind};
pub use chars::{Chars, chars};
pub use charset::{
    ALPHANUM_CHARS, ALPHA_CHARS, AnyChar, CharIn, CharNotIn, DIGIT_CHARS, LOWER_CHARS,
    UPPER_CHARS, WHITESPACE_CHARS, alpha, alphanum, any_char, char_in, char_not_in, digit,
    lower, upper,
};
pub use discard::Discard;
pub use end::{End, end};
pub use error::ParseError;
pub use exact::{Exact, exact};
pub use except::Except;
pub use first::{First, first};
pub use forward::{Forward, forward};
pub use infix::{InfixExpr, infix_expr};
pub use invalid::{Invalid, invalid};
pub use keyword::{Keyword, keyword};
pub use limit::{DynamicLimit, Limit, dynamic_limit, limit};
pub use literal::{AnyCase, Literal, SignificantLiteral, any_case, lit, sig_lit};
pub use longest::{Longest, longest};
pub use lookahead::{Present, Preserve, present, preserve};
pub use map::Map;
pub use not::{Not, not};
pub use optional::Optional;
pub use parser::{Parser, ParserExt};
pub use railroad::{Component, TokenKind};
pub use regexp::{CaptureMode, RegexParser, regexp, regexp_groups};
pub use repeat::{Repeat, one_or_more, repeat, zero_or_more};
pub use result::{Expectation, Expectations, ParseResult};
pub use return_::{Return, ret};
pub use then::Then;
pub use value::{Record, Value};
pub use whitespace::{Whitespace, skip_space, whitespace};
pub use word::{Word, alpha_word, alphanum_word, word};
