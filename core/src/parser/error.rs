//! Parse boundary errors.

use crate::parser::Rule;

/// Error returned when a line fails to parse.
///
/// Wraps the underlying pest error; its `Display` output (including the
/// caret-annotated source snippet) is what the REPL shows the user.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ParseError(#[from] Box<pest::error::Error<Rule>>);
