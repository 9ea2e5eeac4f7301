use std::cell::RefCell;
use std::rc::Rc;

use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::ParseResult;

/// Forward declaration of a parser, for recursive grammars.
///
/// Clones share the same slot, so a grammar can reference the parser before
/// its definition exists and assign it later with `set`. Reassigning swaps
/// the definition for every clone. Parsing before any assignment is a
/// programming error and panics.
pub struct Forward {
    target: Rc<RefCell<Option<Rc<dyn Parser>>>>,
}

impl Forward {
    pub fn new() -> Self {
        Forward {
            target: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set(&self, parser: impl Parser + 'static) {
        *self.target.borrow_mut() = Some(Rc::new(parser));
    }
}

impl Default for Forward {
    fn default() -> Self {
        Forward::new()
    }
}

impl Clone for Forward {
    fn clone(&self) -> Self {
        Forward {
            target: Rc::clone(&self.target),
        }
    }
}

impl Parser for Forward {
    fn parse(
        &self,
        input: &[u8],
        position: usize,
        end: usize,
        space: &dyn Parser,
    ) -> ParseResult {
        let target = self
            .target
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("Forward parser used before being set"));
        target.parse(input, position, end, space)
    }

    fn railroad(&self) -> Component {
        Component::Bullet
    }
}

/// Convenience function to create a Forward parser.
pub fn forward() -> Forward {
    Forward::new()
}
