use crate::invalid::Invalid;
use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;

/// Parser combinator requiring a terminator right after its inner match.
///
/// A bare `lit("int")` happily matches the first three characters of
/// "integer"; `keyword(lit("int"))` does not, because the character after
/// the match must satisfy the terminator. The terminator is checked as a
/// lookahead and never consumed; by default it is the ambient whitespace
/// parser, and by default end-of-input also terminates.
///
/// The terminator check normally runs with whitespace skipping suppressed,
/// so the ambient skipper cannot eat the very characters the terminator is
/// supposed to see. `exact(false)` restores the ambient parser for grammars
/// whose terminator is itself whitespace-insignificant.
pub struct Keyword<P> {
    parser: P,
    terminator: Option<Box<dyn Parser>>,
    exact: bool,
    or_end: bool,
}

impl<P> Keyword<P> {
    pub fn new(parser: P) -> Self {
        Keyword {
            parser,
            terminator: None,
            exact: true,
            or_end: true,
        }
    }

    pub fn terminator(mut self, terminator: impl Parser + 'static) -> Self {
        self.terminator = Some(Box::new(terminator));
        self
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn or_end(mut self, or_end: bool) -> Self {
        self.or_end = or_end;
        self
    }
}

impl<P> Parser for Keyword<P>
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
        let result = self.parser.parse(input, position, end, space);
        let stop = match &result {
            ParseResult::Success { end, .. } => *end,
            ParseResult::Failure { .. } => return result,
        };

        if self.or_end && stop == end {
            return result;
        }

        let terminator: &dyn Parser = match &self.terminator {
            Some(terminator) => terminator.as_ref(),
            None => space,
        };
        let island: &dyn Parser = if self.exact { &Invalid } else { space };
        match terminator.parse(input, stop, end, island) {
            ParseResult::Success { .. } => result,
            failure => failure,
        }
    }

    fn railroad(&self) -> Component {
        self.parser.railroad()
    }
}

/// Convenience function to create a Keyword parser.
pub fn keyword<P>(parser: P) -> Keyword<P>
where
    P: Parser,
{
    Keyword::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::alphanum;
    use crate::literal::{lit, sig_lit};
    use crate::lookahead::present;
    use crate::not::not;
    use crate::parser::ParserExt;
    use crate::value::Value;
    use crate::whitespace::Whitespace;

    #[test]
    fn test_keyword_rejects_prefix_match() {
        let kw = keyword(sig_lit("int"));
        assert!(!kw.parse(b"integer", 0, 7, &Whitespace).is_success());
    }

    #[test]
    fn test_keyword_accepts_whitespace_terminator() {
        let kw = keyword(sig_lit("int"));
        match kw.parse(b"int x", 0, 5, &Whitespace) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 3);
                assert_eq!(value, Value::Str("int".into()));
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_keyword_accepts_end_of_input() {
        let kw = keyword(sig_lit("int"));
        assert!(kw.parse(b"int", 0, 3, &Whitespace).is_success());
    }

    #[test]
    fn test_keyword_without_or_end_requires_terminator() {
        let kw = keyword(sig_lit("int")).or_end(false);
        assert!(!kw.parse(b"int", 0, 3, &Whitespace).is_success());
        assert!(kw.parse(b"int ", 0, 4, &Whitespace).is_success());
    }

    #[test]
    fn test_keyword_custom_terminator() {
        // "end" only counts when not followed by another word character.
        let kw = keyword(sig_lit("end")).terminator(not(alphanum()));
        assert!(kw.parse(b"end;", 0, 4, &Whitespace).is_success());
        assert!(!kw.parse(b"endif", 0, 5, &Whitespace).is_success());
    }

    #[test]
    fn test_keyword_exact_suppresses_ambient_skipping() {
        // With the ambient skipper active the terminator would see ";"
        // after eating the space; in exact mode it sees the space itself.
        let kw = keyword(sig_lit("int")).terminator(present(lit(";")));
        assert!(!kw.parse(b"int ;", 0, 5, &Whitespace).is_success());
        let loose = keyword(sig_lit("int"))
            .terminator(present(lit(";")))
            .exact(false);
        assert!(loose.parse(b"int ;", 0, 5, &Whitespace).is_success());
    }

    #[test]
    fn test_keyword_does_not_consume_terminator() {
        let parser = keyword(sig_lit("if")).then(sig_lit("x"));
        match parser.parse(b"if x", 0, 4, &Whitespace) {
            ParseResult::Success { end, value, .. } => {
                assert_eq!(end, 4);
                assert_eq!(
                    value,
                    Value::Tuple(vec![Value::Str("if".into()), Value::Str("x".into())])
                );
            }
            ParseResult::Failure { .. } => panic!("expected success"),
        }
    }
}
