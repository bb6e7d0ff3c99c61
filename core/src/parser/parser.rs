//! The grammar boundary.
//!
//! Parsing is delegated to a pest grammar; the rest of the crate only
//! consumes the resulting pair tree. Each pair carries the rule it matched
//! and the matched text; literal parentheses are consumed by the grammar
//! itself and never show up as pairs.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::parser::error::ParseError;

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Parse one line of input.
///
/// Returns the root `lispy` pair of the concrete syntax tree, covering the
/// whole line, or a [`ParseError`] whose rendering points at the offending
/// position.
pub fn parse(input: &str) -> Result<Pair<'_, Rule>, ParseError> {
    let mut pairs =
        LispyParser::parse(Rule::lispy, input).map_err(|e| ParseError::from(Box::new(e)))?;
    Ok(pairs
        .next()
        .expect("a successful parse yields exactly one root pair"))
}
