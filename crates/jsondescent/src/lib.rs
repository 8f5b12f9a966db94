//! A single-pass recursive-descent JSON parser.
//!
//! `jsondescent` turns a complete JSON document held in memory into an owned
//! [`Value`] tree. Every byte is examined once, in order; each grammar
//! production (object, array, string, number, literal) is its own routine
//! sharing a forward-only cursor.
//!
//! Failures are reported as a [`ParseError`] whose [`ErrorKind`] says what
//! went wrong and whose offset, line and column say where.
//!
//! ```rust
//! use jsondescent::{ErrorKind, Value, parse};
//!
//! let value = parse(r#"{"name": "descent", "tags": ["json", "parser"], "stars": 1.5e1}"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("descent"));
//! assert_eq!(value.get("stars").and_then(Value::as_f64), Some(15.0));
//!
//! let err = parse(r#"{"a": 1,}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
//! ```

mod cursor;
mod error;
mod escape_buffer;
mod literal_buffer;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::Parser;
pub use value::{Array, Map, Value};

/// Parses `input` as a single JSON document using default options.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not exactly one valid JSON value,
/// optionally surrounded by whitespace.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::default().parse(input)
}

/// Parses `input` as a single JSON document using the given options.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Value, ParseError> {
    Parser::new(options).parse(input)
}
