//! The runtime value model.
//!
//! [`Value`] is the single datum the reader builds and the evaluator reduces.
//! It is a strict ownership tree: an s-expression exclusively owns its
//! elements, dropping a node recursively drops everything under it, and
//! detaching an element (`Vec::remove`) moves it out by value. That makes the
//! release-exactly-once discipline structural rather than a convention.

use std::fmt;

/// A runtime value.
///
/// A fully reduced top-level result is `Int`, `Double`, `Error`, or the empty
/// `Sexpr`; `Symbol` only occurs in operator position before application.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer literal.
    Int(i64),
    /// Floating-point literal.
    Double(f64),
    /// Terminal failure; absorbs all further combination.
    Error(String),
    /// Operator name prior to application (`+ - * / % ^`).
    Symbol(String),
    /// Ordered list of owned children. When more than one element is
    /// present, the first names the operator applied to the rest.
    Sexpr(Vec<Value>),
}

impl Value {
    /// Build an error value from a message.
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Build a symbol value from an operator name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// True for the numeric variants operators can combine.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            // Fixed-point with six fractional digits, like C's %lf.
            Value::Double(x) => write!(f, "{x:.6}"),
            Value::Error(message) => write!(f, "{message}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::Sexpr(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, ")")
            }
        }
    }
}
