//! Recursive S-expression reduction.
//!
//! The evaluator reduces a [`Value`](crate::values::Value) tree to a single
//! scalar-or-error result.
//!
//! ## Design Principles
//!
//! - **Total**: every input tree reduces to a result; failures are in-band
//!   [`Value::Error`](crate::values::Value::Error) values, never panics.
//! - **Depth-first**: nested expressions reduce innermost first.
//! - **First error wins**: the leftmost error in an expression is returned
//!   and the rest of the expression is dropped.

mod eval;
mod operators;


pub use eval::eval;
pub use operators::apply;
