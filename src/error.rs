use std::mem::{Discriminant, discriminant};

use thiserror::Error;

use crate::result::Expectation;

/// The driver-level parse error: a single positioned, de-duplicated
/// diagnostic. This is the only place the engine synthesizes an error
/// message; inside the combinators, failure stays a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("At position {position}: expected one of {}", .expected.join(", "))]
    Syntax {
        position: usize,
        /// Rendered expectation texts, furthest position only, duplicates
        /// removed, original order preserved.
        expected: Vec<String>,
    },
    #[error("no expectations were recorded, so a diagnostic cannot be constructed")]
    NoExpectations,
}

impl ParseError {
    /// Position the diagnostic points at, when there is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { position, .. } => Some(*position),
            ParseError::NoExpectations => None,
        }
    }
}

/// Converts accumulated expectations into a [`ParseError`]. The furthest
/// failure position wins; `Unsatisfiable` entries are noise unless they are
/// all that's left, in which case a single one survives (rendered "EOF");
/// the remainder is de-duplicated by rendered text.
pub fn diagnose(expected: &[(usize, Expectation)]) -> ParseError {
    let Some(position) = expected.iter().map(|(p, _)| *p).max() else {
        return ParseError::NoExpectations;
    };
    let mut rendered: Vec<(Discriminant<Expectation>, String)> = expected
        .iter()
        .filter(|(p, e)| *p == position && !matches!(e, Expectation::Unsatisfiable))
        .map(|(_, e)| (discriminant(e), e.to_string()))
        .collect();
    if rendered.is_empty() {
        rendered.push((
            discriminant(&Expectation::Unsatisfiable),
            Expectation::Unsatisfiable.to_string(),
        ));
    }
    // Deduplicate by kind plus rendered text, so same-looking expectations
    // of different kinds both survive.
    let mut seen: Vec<(Discriminant<Expectation>, String)> = Vec::new();
    let mut unique: Vec<String> = Vec::with_capacity(rendered.len());
    for (kind, text) in rendered {
        let key = (kind, text);
        if !seen.contains(&key) {
            unique.push(key.1.clone());
            seen.push(key);
        }
    }
    ParseError::Syntax {
        position,
        expected: unique,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnose_keeps_furthest_position_only() {
        let expected = vec![
            (2, Expectation::StringLiteral("(".to_string())),
            (5, Expectation::AnyCharIn(b"0123456789".to_vec())),
            (5, Expectation::AnyCharIn(b"0123456789".to_vec())),
            (3, Expectation::AnyChar),
        ];
        let error = diagnose(&expected);
        assert_eq!(
            error,
            ParseError::Syntax {
                position: 5,
                expected: vec!["any char in \"0123456789\"".to_string()],
            }
        );
        assert_eq!(
            error.to_string(),
            "At position 5: expected one of any char in \"0123456789\""
        );
    }

    #[test]
    fn test_diagnose_drops_unsatisfiable_when_others_present() {
        let expected = vec![
            (4, Expectation::Unsatisfiable),
            (4, Expectation::StringLiteral(")".to_string())),
        ];
        let error = diagnose(&expected);
        assert_eq!(
            error,
            ParseError::Syntax {
                position: 4,
                expected: vec!["\")\"".to_string()],
            }
        );
    }

    #[test]
    fn test_diagnose_keeps_one_unsatisfiable_as_eof() {
        let expected = vec![
            (1, Expectation::Unsatisfiable),
            (3, Expectation::Unsatisfiable),
            (3, Expectation::Unsatisfiable),
        ];
        let error = diagnose(&expected);
        assert_eq!(error.to_string(), "At position 3: expected one of EOF");
    }

    #[test]
    fn test_diagnose_preserves_first_seen_order() {
        let expected = vec![
            (2, Expectation::StringLiteral("+".to_string())),
            (2, Expectation::StringLiteral("*".to_string())),
            (2, Expectation::StringLiteral("+".to_string())),
        ];
        let error = diagnose(&expected);
        assert_eq!(
            error.to_string(),
            "At position 2: expected one of \"+\", \"*\""
        );
    }

    #[test]
    fn test_diagnose_keeps_same_text_of_different_kinds() {
        // A custom message that happens to render like a structural
        // expectation is still a distinct expectation.
        let expected = vec![
            (1, Expectation::AnyChar),
            (1, Expectation::Custom("any char".into())),
            (1, Expectation::AnyChar),
        ];
        let error = diagnose(&expected);
        assert_eq!(
            error,
            ParseError::Syntax {
                position: 1,
                expected: vec!["any char".to_string(), "any char".to_string()],
            }
        );
    }

    #[test]
    fn test_diagnose_with_no_expectations() {
        assert_eq!(diagnose(&[]), ParseError::NoExpectations);
        assert_eq!(diagnose(&[]).position(), None);
    }
}
