//! Lispy - a minimal S-expression arithmetic language.
//!
//! An input line is parsed by a pest grammar into a concrete syntax tree,
//! converted by the reader into a runtime [`Value`] tree, and reduced by the
//! evaluator to a single number or an in-band error value.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed literals and bad operator applications become
//!   [`Value::Error`] results, not panics or Rust errors.
//! - **Strict ownership tree**: every value is owned by exactly one parent;
//!   there is no sharing and no cycles, so release is structural.
//! - **Errors absorb**: the first error found in left-to-right evaluation
//!   order propagates unchanged to the root.
//!
//! ## Example
//!
//! ```
//! use lispy_core::{Value, run_line};
//!
//! assert_eq!(run_line("(+ 1 (* 2 3))").unwrap(), Value::Int(7));
//! assert_eq!(run_line("(/ 10 0)").unwrap(), Value::error("division by zero"));
//! ```

pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod values;

pub use evaluator::eval;
pub use parser::{LispyParser, ParseError, Rule, parse};
pub use reader::read;
pub use values::Value;

/// Parse, build, and evaluate one line of input.
///
/// Only the parse boundary is fallible; everything downstream is total and
/// reports failure in-band as [`Value::Error`].
pub fn run_line(input: &str) -> Result<Value, ParseError> {
    let root = parser::parse(input)?;
    Ok(evaluator::eval(reader::read(root)))
}
