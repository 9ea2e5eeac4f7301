use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};
use crate::value::Value;
use crate::whitespace::skip_space;

use crate::charset::{ALPHA_CHARS, ALPHANUM_CHARS};

/// Parser for a word drawn greedily from a character set.
///
/// The first character must come from the init set (by default the same as
/// the main set); further characters come from the main set, up to `max`
/// total. Fewer than `min` characters is a failure, except that `min == 0`
/// turns a missing first character into an empty-string match.
pub struct Word {
    chars: Vec<u8>,
    init_chars: Vec<u8>,
    min: usize,
    max: Option<usize>,
}

impl Word {
    pub fn new(chars: impl AsRef<[u8]>) -> Self {
        let chars = chars.as_ref().to_vec();
        Word {
            init_chars: chars.clone(),
            chars,
            min: 1,
            max: None,
        }
    }

    /// Restricts what the first character may be.
    pub fn init(mut self, init_chars: impl AsRef<[u8]>) -> Self {
        self.init_chars = init_chars.as_ref().to_vec();
        self
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

impl Parser for Word {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        if position >= end || !self.init_chars.contains(&input[position]) {
            if self.min == 0 {
                return ParseResult::success(
                    position,
                    Value::Str(String::new()),
                    vec![(position, Expectation::AnyCharIn(self.init_chars.clone()))],
                );
            }
            return ParseResult::fail_at(
                position,
                Expectation::AnyCharIn(self.init_chars.clone()),
            );
        }
        let mut stop = position + 1;
        while stop < end
            && self.chars.contains(&input[stop])
            && self.max.is_none_or(|max| stop - position < max)
        {
            stop += 1;
        }
        let taken = stop - position;
        if taken < self.min {
            return ParseResult::fail_at(stop, Expectation::AnyCharIn(self.chars.clone()));
        }
        ParseResult::success(
            stop,
            Value::Str(String::from_utf8_lossy(&input[position..stop]).into_owned()),
            vec![(stop, Expectation::AnyCharIn(self.chars.clone()))],
        )
    }

    fn railroad(&self) -> Component {
        Component::token(
            TokenKind::Description,
            format!("word of \"{}\"", String::from_utf8_lossy(&self.chars)),
        )
    }
}

/// Convenience function to create a Word parser.
pub fn word(chars: impl AsRef<[u8]>) -> Word {
    Word::new(chars)
}

/// A word of ASCII letters.
pub fn alpha_word() -> Word {
    Word::new(ALPHA_CHARS)
}

/// A word of ASCII letters and digits.
pub fn alphanum_word() -> Word {
    Word::new(ALPHANUM_CHARS)
}
