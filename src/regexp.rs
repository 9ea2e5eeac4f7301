use regex::bytes::Regex;

use crate::parser::Parser;
use crate::railroad::{Component, TokenKind};
use crate::result::{Expectation, ParseResult};
use crate::value::Value;
use crate::whitespace::skip_space;

/// What a successful regex match should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// The whole matched text as a string.
    Whole,
    /// The capture groups only: one group yields its string, several a
    /// tuple of strings. A pattern without groups falls back to the whole
    /// match. Unmatched groups yield the empty string, not an absent value.
    Groups,
    /// A tuple of the whole match followed by every group.
    WholeWithGroups,
}

/// Parser backed by a compiled regular expression, matched at the current
/// position and bounded by the active window's end.
///
/// The pattern is compiled at construction; an invalid pattern is a
/// programmer error and panics there, outside the backtracking model.
pub struct RegexParser {
    pattern: String,
    regex: Regex,
    mode: CaptureMode,
}

impl RegexParser {
    pub fn new(pattern: &str, mode: CaptureMode) -> Self {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(error) => panic!("invalid regex pattern {:?}: {}", pattern, error),
        };
        RegexParser {
            pattern: pattern.to_string(),
            regex,
            mode,
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Parser for RegexParser {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let position = skip_space(input, position, end, space);
        let window = &input[position..end];
        let Some(captures) = self.regex.captures(window) else {
            return ParseResult::fail_at(position, Expectation::Regex(self.pattern.clone()));
        };
        let whole = match captures.get(0) {
            // The leftmost match must be anchored at the window start.
            Some(m) if m.start() == 0 => m,
            _ => {
                return ParseResult::fail_at(position, Expectation::Regex(self.pattern.clone()));
            }
        };
        let stop = position + whole.end();
        let groups: Vec<Value> = (1..captures.len())
            .map(|i| {
                Value::Str(
                    captures
                        .get(i)
                        .map(|m| lossy(m.as_bytes()))
                        .unwrap_or_default(),
                )
            })
            .collect();
        let value = match self.mode {
            CaptureMode::Whole => Value::Str(lossy(whole.as_bytes())),
            CaptureMode::Groups => match groups.len() {
                0 => Value::Str(lossy(whole.as_bytes())),
                1 => groups.into_iter().next().unwrap_or(Value::None),
                _ => Value::Tuple(groups),
            },
            CaptureMode::WholeWithGroups => {
                let mut items = Vec::with_capacity(groups.len() + 1);
                items.push(Value::Str(lossy(whole.as_bytes())));
                items.extend(groups);
                Value::Tuple(items)
            }
        };
        ParseResult::success(stop, value, vec![(stop, Expectation::Unsatisfiable)])
    }

    fn railroad(&self) -> Component {
        Component::token(TokenKind::Description, format!("regex \"{}\"", self.pattern))
    }
}

/// Convenience function to create a whole-match RegexParser.
pub fn regexp(pattern: &str) -> RegexParser {
    RegexParser::new(pattern, CaptureMode::Whole)
}

/// Convenience function to create a groups-only RegexParser.
pub fn regexp_groups(pattern: &str) -> RegexParser {
    RegexParser::new(pattern, CaptureMode::Groups)
}
