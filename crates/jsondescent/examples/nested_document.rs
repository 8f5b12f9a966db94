//! Parses a small nested document and prints the resulting tree.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=trace cargo run -p jsondescent --example nested_document
//! ```
//!
//! Pass a file path as the first argument to parse that file instead.

use jsondescent::{ParseError, Value, parse};

const DOCUMENT: &str =
    r#"{"oo":[12, true, false, [{"bar": {      "baz": [12,23], "fooppp": 12 } }]] }"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DOCUMENT.to_string(),
    };

    let value = match parse(&input) {
        Ok(value) => value,
        Err(err) => {
            report(&input, &err);
            return Err(err.into());
        }
    };

    println!("{value:#?}");
    println!("{value}");

    if let Some(Value::Array(items)) = value.get("oo") {
        println!("\"oo\" holds {} items", items.len());
    }
    Ok(())
}

/// Prints the offending line with a caret under the error column.
fn report(input: &str, err: &ParseError) {
    let line = input.lines().nth(err.line() - 1).unwrap_or_default();
    eprintln!("{line}");
    eprintln!("{:>width$}", "^", width = err.column());
}
