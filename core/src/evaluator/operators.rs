//! Numeric operator dispatch.
//!
//! Operators fold left over their operands. Mixed-type arithmetic keeps the
//! accumulator's variant tag: `Int` combined with `Double` computes in
//! floating point and truncates back into the integer. `%` and `^` are only
//! defined for integer pairs; any (operator, type-pair) combination outside
//! the dispatch table leaves the accumulator unchanged.

use crate::values::Value;

/// Apply `op` across `operands` as a left fold.
///
/// Every operand must already be reduced to `Int` or `Double`; anything else
/// yields an error. A lone operand after `-` is unary negation. An error
/// accumulator halts the fold immediately and the remaining operands are
/// dropped unprocessed.
pub fn apply(op: &str, operands: Vec<Value>) -> Value {
    if !operands.iter().all(Value::is_number) {
        return Value::error("cannot operate on non-number");
    }

    let mut rest = operands.into_iter();
    let Some(first) = rest.next() else {
        // The evaluator never applies an operator to zero operands; with
        // nothing to fold there is nothing to return but the empty list.
        return Value::Sexpr(Vec::new());
    };

    if op == "-" && rest.len() == 0 {
        return negate(first);
    }

    let mut acc = first;
    for y in rest {
        acc = combine(op, acc, y);
        if acc.is_error() {
            break;
        }
    }
    acc
}

/// Flip the sign, preserving the variant.
fn negate(value: Value) -> Value {
    match value {
        Value::Int(n) => Value::Int(n.wrapping_neg()),
        Value::Double(x) => Value::Double(-x),
        other => other,
    }
}

/// Combine one operand into the accumulator.
///
/// Integer arithmetic wraps rather than panicking on overflow; division and
/// remainder by zero produce an error value and never trap.
fn combine(op: &str, x: Value, y: Value) -> Value {
    use Value::{Double, Int};

    match (x, y) {
        (Int(a), Int(b)) => match op {
            "+" => Int(a.wrapping_add(b)),
            "-" => Int(a.wrapping_sub(b)),
            "*" => Int(a.wrapping_mul(b)),
            "/" => {
                if b == 0 {
                    Value::error("division by zero")
                } else {
                    Int(a.wrapping_div(b))
                }
            }
            "%" => {
                if b == 0 {
                    Value::error("division by zero")
                } else {
                    Int(a.wrapping_rem(b))
                }
            }
            // Exponentiation goes through floating point and truncates back.
            "^" => Int((a as f64).powf(b as f64) as i64),
            _ => Int(a),
        },

        (Double(a), Int(b)) => {
            let b = b as f64;
            match op {
                "+" => Double(a + b),
                "-" => Double(a - b),
                "*" => Double(a * b),
                "/" => {
                    if b == 0.0 {
                        Value::error("division by zero")
                    } else {
                        Double(a / b)
                    }
                }
                _ => Double(a),
            }
        }

        (Int(a), Double(b)) => {
            // The accumulator keeps its integer tag; the floating-point
            // contribution is truncated on the way back in.
            let a = a as f64;
            match op {
                "+" => Int((a + b) as i64),
                "-" => Int((a - b) as i64),
                "*" => Int((a * b) as i64),
                "/" => {
                    if b == 0.0 {
                        Value::error("division by zero")
                    } else {
                        Int((a / b) as i64)
                    }
                }
                _ => Int(a as i64),
            }
        }

        (Double(a), Double(b)) => match op {
            "+" => Double(a + b),
            "-" => Double(a - b),
            "*" => Double(a * b),
            "/" => {
                if b == 0.0 {
                    Value::error("division by zero")
                } else {
                    Double(a / b)
                }
            }
            _ => Double(a),
        },

        // Non-numeric pairs are rejected up front and an error accumulator
        // halts the fold, so nothing else reaches this point.
        (x, _) => x,
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, combine};
    use crate::values::Value;

    #[test]
    fn test_int_arithmetic() {
        assert_eq!(combine("+", Value::Int(2), Value::Int(3)), Value::Int(5));
        assert_eq!(combine("-", Value::Int(2), Value::Int(3)), Value::Int(-1));
        assert_eq!(combine("*", Value::Int(4), Value::Int(3)), Value::Int(12));
        assert_eq!(combine("/", Value::Int(10), Value::Int(2)), Value::Int(5));
        assert_eq!(combine("%", Value::Int(10), Value::Int(3)), Value::Int(1));
        assert_eq!(combine("^", Value::Int(2), Value::Int(10)), Value::Int(1024));
    }

    #[test]
    fn test_int_division_by_zero() {
        assert_eq!(
            combine("/", Value::Int(10), Value::Int(0)),
            Value::error("division by zero")
        );
        assert_eq!(
            combine("%", Value::Int(10), Value::Int(0)),
            Value::error("division by zero")
        );
    }

    #[test]
    fn test_int_overflow_wraps() {
        assert_eq!(
            combine("+", Value::Int(i64::MAX), Value::Int(1)),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn test_double_arithmetic() {
        assert_eq!(
            combine("+", Value::Double(1.5), Value::Double(2.25)),
            Value::Double(3.75)
        );
        assert_eq!(
            combine("/", Value::Double(10.0), Value::Double(4.0)),
            Value::Double(2.5)
        );
    }

    #[test]
    fn test_double_division_by_zero_errors() {
        // No IEEE infinity here: a zero divisor is an error value.
        assert_eq!(
            combine("/", Value::Double(1.0), Value::Double(0.0)),
            Value::error("division by zero")
        );
        assert_eq!(
            combine("/", Value::Double(1.0), Value::Int(0)),
            Value::error("division by zero")
        );
        assert_eq!(
            combine("/", Value::Int(1), Value::Double(0.0)),
            Value::error("division by zero")
        );
    }

    #[test]
    fn test_mixed_keeps_accumulator_tag() {
        // Int accumulator truncates the floating-point contribution.
        assert_eq!(
            combine("+", Value::Int(1), Value::Double(2.7)),
            Value::Int(3)
        );
        // Double accumulator stays a double.
        assert_eq!(
            combine("+", Value::Double(2.5), Value::Int(1)),
            Value::Double(3.5)
        );
    }

    #[test]
    fn test_unknown_combination_is_noop() {
        // `%` and `^` are not defined for doubles; the accumulator passes
        // through unchanged.
        assert_eq!(
            combine("%", Value::Double(1.5), Value::Int(2)),
            Value::Double(1.5)
        );
        assert_eq!(
            combine("^", Value::Double(2.0), Value::Double(3.0)),
            Value::Double(2.0)
        );
    }

    #[test]
    fn test_fold_left() {
        let operands = vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)];
        assert_eq!(apply("-", operands), Value::Int(-8));
    }

    #[test]
    fn test_unary_negation() {
        assert_eq!(apply("-", vec![Value::Int(5)]), Value::Int(-5));
        assert_eq!(apply("-", vec![Value::Double(2.5)]), Value::Double(-2.5));
    }

    #[test]
    fn test_non_number_operand() {
        let operands = vec![Value::Int(1), Value::symbol("+")];
        assert_eq!(
            apply("+", operands),
            Value::error("cannot operate on non-number")
        );
    }

    #[test]
    fn test_error_halts_fold() {
        // The zero divisor errors out; the trailing operands are dropped
        // without being combined.
        let operands = vec![Value::Int(10), Value::Int(0), Value::Int(5)];
        assert_eq!(apply("/", operands), Value::error("division by zero"));
    }
}
