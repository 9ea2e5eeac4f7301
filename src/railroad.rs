use std::fmt;

/// How a token in a railroad diagram should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A reference to another production in the grammar.
    Production,
    /// Literal text that must appear verbatim.
    Text,
    /// Literal text matched without regard to case.
    AnyCase,
    /// A prose description of what is matched.
    Description,
}

/// The structural intermediate representation a grammar exports for
/// railroad-diagram rendering.
///
/// The engine's only obligation is to produce a faithful structure through
/// [`crate::parser::Parser::railroad`]; layout and drawing belong to an
/// external pipeline. The `Display` rendering here is a compact one-line
/// description, which the negative-lookahead combinators also borrow for
/// their "none of X" diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Matches nothing; the empty branch of an optional construct.
    Nothing,
    /// A sequence of components, left to right.
    Then(Vec<Component>),
    /// A choice between components.
    Or(Vec<Component>),
    Token {
        kind: TokenKind,
        text: String,
    },
    /// A repeated body with a delimiter on the return path.
    Loop {
        body: Box<Component>,
        delimiter: Box<Component>,
    },
    /// An opaque point in the diagram, for constructs with no useful
    /// structure to show (a dynamically chosen parser, for instance).
    Bullet,
}

impl Component {
    pub fn token(kind: TokenKind, text: impl Into<String>) -> Self {
        Component::Token {
            kind,
            text: text.into(),
        }
    }

    /// Structural cleanup before rendering: nested sequences and choices are
    /// flattened into their parents, and `Nothing` disappears from
    /// sequences. Runs until a fixed point.
    pub fn optimize(&mut self) {
        match self {
            Component::Then(children) => {
                for child in children.iter_mut() {
                    child.optimize();
                }
                let mut flat = Vec::with_capacity(children.len());
                for child in children.drain(..) {
                    match child {
                        Component::Nothing => {}
                        Component::Then(inner) => flat.extend(inner),
                        other => flat.push(other),
                    }
                }
                *children = flat;
            }
            Component::Or(children) => {
                for child in children.iter_mut() {
                    child.optimize();
                }
                let mut flat = Vec::with_capacity(children.len());
                for child in children.drain(..) {
                    match child {
                        Component::Or(inner) => flat.extend(inner),
                        other => flat.push(other),
                    }
                }
                *children = flat;
            }
            Component::Loop { body, delimiter } => {
                body.optimize();
                delimiter.optimize();
            }
            _ => {}
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Nothing => write!(f, "nothing"),
            Component::Then(children) => {
                let parts: Vec<String> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", parts.join(" "))
            }
            Component::Or(children) => {
                let parts: Vec<String> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", parts.join(" | "))
            }
            Component::Token { kind, text } => match kind {
                TokenKind::Text => write!(f, "\"{}\"", text),
                TokenKind::AnyCase => write!(f, "\"{}\" (any case)", text),
                TokenKind::Production | TokenKind::Description => write!(f, "{}", text),
            },
            Component::Loop { body, .. } => write!(f, "{}...", body),
            Component::Bullet => write!(f, "anything"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_flattens_nested_then() {
        let mut component = Component::Then(vec![
            Component::token(TokenKind::Text, "a"),
            Component::Then(vec![
                Component::token(TokenKind::Text, "b"),
                Component::Nothing,
                Component::token(TokenKind::Text, "c"),
            ]),
        ]);
        component.optimize();
        assert_eq!(
            component,
            Component::Then(vec![
                Component::token(TokenKind::Text, "a"),
                Component::token(TokenKind::Text, "b"),
                Component::token(TokenKind::Text, "c"),
            ])
        );
    }

    #[test]
    fn test_optimize_flattens_nested_or() {
        let mut component = Component::Or(vec![
            Component::token(TokenKind::Text, "a"),
            Component::Or(vec![
                Component::token(TokenKind::Text, "b"),
                Component::token(TokenKind::Text, "c"),
            ]),
        ]);
        component.optimize();
        assert_eq!(
            component,
            Component::Or(vec![
                Component::token(TokenKind::Text, "a"),
                Component::token(TokenKind::Text, "b"),
                Component::token(TokenKind::Text, "c"),
            ])
        );
    }

    #[test]
    fn test_or_keeps_nothing_branches() {
        let mut component = Component::Or(vec![
            Component::token(TokenKind::Text, "a"),
            Component::Nothing,
        ]);
        component.optimize();
        assert_eq!(
            component,
            Component::Or(vec![
                Component::token(TokenKind::Text, "a"),
                Component::Nothing,
            ])
        );
    }

    #[test]
    fn test_display_renders_compact_description() {
        let component = Component::Then(vec![
            Component::token(TokenKind::Text, "("),
            Component::Or(vec![
                Component::token(TokenKind::Description, "any char"),
                Component::Nothing,
            ]),
            Component::token(TokenKind::Text, ")"),
        ]);
        assert_eq!(component.to_string(), "\"(\" any char | nothing \")\"");
    }
}
