//! Core reduction logic.

use tracing::trace;

use crate::evaluator::operators;
use crate::values::Value;

/// Reduce a value tree to a single result.
///
/// Numbers, errors, and bare symbols pass through unchanged; s-expressions
/// reduce recursively. Ownership of the input transfers in, and every node
/// is either consumed into the result or dropped on the way out.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(elements) => eval_sexpr(elements),
        other => other,
    }
}

fn eval_sexpr(elements: Vec<Value>) -> Value {
    // Evaluate every element in place, left to right.
    let mut elements: Vec<Value> = elements.into_iter().map(eval).collect();

    // First error in left-to-right order wins; the remainder of the
    // partially evaluated expression is dropped.
    if let Some(i) = elements.iter().position(Value::is_error) {
        return elements.swap_remove(i);
    }

    // () evaluates to itself.
    if elements.is_empty() {
        return Value::Sexpr(elements);
    }

    // A single element unwraps: the parentheses were purely grouping.
    if elements.len() == 1 {
        return elements.remove(0);
    }

    let head = elements.remove(0);
    let Value::Symbol(op) = head else {
        return Value::error("S-expression does not start with symbol");
    };

    trace!(%op, operands = elements.len(), "applying operator");
    operators::apply(&op, elements)
}
