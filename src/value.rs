use std::borrow::Cow;

/// The dynamic value a successful parse produces.
///
/// The engine is value-polymorphic: different branches of one grammar may
/// produce values of entirely different shapes, so results are carried in
/// this one enum rather than threaded through generics. `Tuple` is the only
/// merge-transparent shape under sequencing; `List` (produced by repetition)
/// and `Record` (a tagged domain value) pass through [`Value::merge`] intact,
/// which is what lets tagged results survive sequencing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Record(Record),
}

/// A tagged, fixed-field domain value. Opaque to the sequencing merge rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub tag: Cow<'static, str>,
    pub fields: Vec<Value>,
}

impl Value {
    /// The canonical sequencing merge. `None` is the identity element, and
    /// tuples flatten, so chains of sequenced parsers produce one flat tuple
    /// rather than nested pairs:
    ///
    /// - `None` + b = b, a + `None` = a
    /// - `Tuple` + `Tuple` concatenates
    /// - `Tuple` + scalar appends, scalar + `Tuple` prepends
    /// - otherwise the result is a fresh two-element `Tuple`
    pub fn merge(a: Value, b: Value) -> Value {
        match (a, b) {
            (Value::None, b) => b,
            (a, Value::None) => a,
            (Value::Tuple(mut left), Value::Tuple(right)) => {
                left.extend(right);
                Value::Tuple(left)
            }
            (Value::Tuple(mut left), b) => {
                left.push(b);
                Value::Tuple(left)
            }
            (a, Value::Tuple(right)) => {
                let mut items = Vec::with_capacity(right.len() + 1);
                items.push(a);
                items.extend(right);
                Value::Tuple(items)
            }
            (a, b) => Value::Tuple(vec![a, b]),
        }
    }

    /// Recursively flattens tuples and lists into a single flat list of
    /// scalar values. `None` flattens to nothing; any other scalar to itself.
    pub fn flatten(&self) -> Vec<Value> {
        match self {
            Value::None => vec![],
            Value::Tuple(items) | Value::List(items) => {
                items.iter().flat_map(|item| item.flatten()).collect()
            }
            other => vec![other.clone()],
        }
    }

    /// Concatenates the textual content of the flattened value: chars,
    /// strings, and (lossily decoded) byte runs. Non-textual scalars are
    /// skipped. The usual way to turn a pile of matched characters into one
    /// string.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for item in self.flatten() {
            match item {
                Value::Char(c) => out.push(c),
                Value::Str(s) => out.push_str(&s),
                Value::Bytes(b) => out.push_str(&String::from_utf8_lossy(&b)),
                _ => {}
            }
        }
        out
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Interprets the value as a length, the way a length-prefixed binary
    /// field needs: a matched character contributes its code point, a single
    /// matched byte its numeric value, an integer its (non-negative)
    /// magnitude.
    pub fn as_len(&self) -> Option<usize> {
        match self {
            Value::Char(c) => Some(*c as usize),
            Value::Bytes(b) if b.len() == 1 => Some(b[0] as usize),
            Value::Int(n) if *n >= 0 => Some(*n as usize),
            _ => None,
        }
    }
}
