mod error;
mod parser;

// Re-export the parser and rule enum for external use
pub use error::ParseError;
pub use parser::LispyParser;
pub use parser::Rule;
pub use parser::parse;
