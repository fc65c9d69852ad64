//! Runtime values.

use std::fmt;

use splice_scan::ScriptValue;

/// A Splice value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Result of an empty expression.
    #[default]
    Empty,
    Number(f64),
    Str(String),
    /// Ordered, possibly nested, list of values.
    Tuple(Vec<Value>),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Zero, empty strings, empty tuples and `Empty` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Empty => false,
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Tuple(items) => !items.is_empty(),
        }
    }

    /// Number of elements of a tuple, or characters of a string.
    pub fn size(&self) -> usize {
        match self {
            Value::Empty | Value::Number(_) => 0,
            Value::Str(s) => s.chars().count(),
            Value::Tuple(items) => items.len(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Tuple(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl ScriptValue for Value {
    fn from_tuple(items: Vec<Self>) -> Self {
        Value::Tuple(items)
    }

    fn as_tuple(&self) -> Option<&[Self]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn as_string(&self) -> String {
        self.to_string()
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}
