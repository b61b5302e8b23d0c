//! Provide the opaque stored-value model for generated accessors.
//!
//! The engine stores field values without inspecting or coercing them; the only structural
//! distinction it ever makes is scalar vs. ordered sequence, because multi-argument writer
//! calls pack into a single [`Value::List`].
//!
//! ## Notes
//! - Values round-trip unchanged: whatever a writer stored, the matching reader returns.
//! - [`Value::Nil`] is what a reader returns for a declared-but-unset field.
//!
//! ## Examples
//! ```rust
//! use quipu_core::Value;
//!
//! let packed = Value::List(vec![Value::Int(1), Value::Int(2)]);
//! assert_eq!(packed.to_string(), "[1, 2]");
//! ```

use core::fmt;

/// An opaque runtime value held in an instance's backing store.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value (unset field).
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// An ordered sequence, as produced by multi-argument packing.
    List(Vec<Value>),
}

impl Value {
    /// Return a short name for the value's category (for messages and logs).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// Return true for [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
