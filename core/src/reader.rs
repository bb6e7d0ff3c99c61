//! Tree builder: converts the concrete syntax tree into runtime values.
//!
//! The reader is total. Malformed literals (out-of-range numbers) become
//! embedded [`Value::Error`] leaves rather than aborting the build; the
//! evaluator surfaces them when it reaches them.

use pest::iterators::Pair;

use crate::parser::Rule;
use crate::values::Value;

/// Convert one syntax-tree node into a [`Value`] tree.
///
/// The root `lispy` pair and nested `sexpr` pairs both collect their
/// children into a [`Value::Sexpr`]; the `EOI` anchor carries no semantic
/// content and is skipped.
pub fn read(pair: Pair<'_, Rule>) -> Value {
    match pair.as_rule() {
        Rule::number => read_number(pair.as_str()),
        Rule::symbol => Value::symbol(pair.as_str()),
        Rule::lispy | Rule::sexpr => {
            let elements = pair
                .into_inner()
                .filter(|inner| inner.as_rule() != Rule::EOI)
                .map(read)
                .collect();
            Value::Sexpr(elements)
        }
        // Silent rules and anchors never surface as pairs of their own.
        Rule::expr | Rule::EOI | Rule::WHITESPACE => {
            unreachable!("non-semantic rule {:?}", pair.as_rule())
        }
    }
}

/// Parse a numeric literal, picking the variant by the presence of a
/// decimal point.
fn read_number(text: &str) -> Value {
    if text.contains('.') {
        match text.parse::<f64>() {
            Ok(x) if x.is_finite() => Value::Double(x),
            _ => Value::error("invalid floating point number"),
        }
    } else {
        match text.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::error("invalid integer"),
        }
    }
}
