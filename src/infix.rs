use crate::parser::Parser;
use crate::railroad::Component;
use crate::result::{Expectations, ParseResult};
use crate::value::Value;

type ReduceFn = fn(Value, Value) -> Value;

/// Left-associative infix expression parser.
///
/// One operand is parsed, then operator/operand pairs are folded into the
/// running value for as long as an operator matches. Each operator carries
/// its own reduction function, so a single level can mix operators of equal
/// precedence ("+" and "-", say). Precedence towers are built by nesting one
/// `InfixExpr` as the operand of another.
pub struct InfixExpr<P> {
    component: P,
    operators: Vec<(Box<dyn Parser>, ReduceFn)>,
}

impl<P> InfixExpr<P> {
    pub fn new(component: P) -> Self {
        InfixExpr {
            component,
            operators: Vec::new(),
        }
    }

    pub fn op(mut self, operator: impl Parser + 'static, reduce: ReduceFn) -> Self {
        self.operators.push((Box::new(operator), reduce));
        self
    }
}

impl<P> Parser for InfixExpr<P>
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
        if self.operators.is_empty() {
            panic!("InfixExpr requires at least one operator");
        }
        let (mut stop, mut value, mut pending) =
            match self.component.parse(input, position, end, space) {
                ParseResult::Success {
                    end,
                    value,
                    pending,
                } => (end, value, pending),
                failure => return failure,
            };

        loop {
            let mut stopped: Expectations = Vec::new();
            let mut matched = None;
            for (operator, reduce) in &self.operators {
                match operator.parse(input, stop, end, space) {
                    ParseResult::Success {
                        end, mut pending, ..
                    } => {
                        stopped.append(&mut pending);
                        matched = Some((end, *reduce));
                        break;
                    }
                    ParseResult::Failure { mut expected } => {
                        stopped.append(&mut expected);
                    }
                }
            }

            let Some((after_op, reduce)) = matched else {
                pending.append(&mut stopped);
                return ParseResult::Success {
                    end: stop,
                    value,
                    pending,
                };
            };

            match self.component.parse(input, after_op, end, space) {
                ParseResult::Success {
                    end,
                    value: right,
                    pending: mut inner,
                } => {
                    stop = end;
                    value = reduce(value, right);
                    pending.append(&mut stopped);
                    pending.append(&mut inner);
                }
                ParseResult::Failure { mut expected } => {
                    pending.append(&mut stopped);
                    pending.append(&mut expected);
                    return ParseResult::Success {
                        end: stop,
                        value,
                        pending,
                    };
                }
            }
        }
    }

    fn railroad(&self) -> Component {
        let mut alternatives: Vec<Component> = self
            .operators
            .iter()
            .map(|(operator, _)| operator.railroad())
            .collect();
        let delimiter = match alternatives.len() {
            0 => Component::Nothing,
            1 => alternatives.remove(0),
            _ => Component::Or(alternatives),
        };
        Component::Loop {
            body: Box::new(self.component.railroad()),
            delimiter: Box::new(delimiter),
        }
    }
}

/// Convenience function to create an InfixExpr parser.
pub fn infix_expr<P>(component: P) -> InfixExpr<P>
where
    P: Parser,
{
    InfixExpr::new(component)
}
