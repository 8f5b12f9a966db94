//! The recursive-descent JSON parser.
//!
//! Each grammar production is a method taking the shared [`Cursor`] by
//! mutable reference. `parse_value` looks at one byte of lookahead and hands
//! off to the object, array, string, number or literal production; the
//! container productions recurse back into `parse_value` for their members.
//! Nothing is ever un-read.
//!
//! # Examples
//!
//! ```rust
//! use jsondescent::{Parser, ParserOptions, Value};
//!
//! let parser = Parser::new(ParserOptions::default());
//! let value = parser.parse(r#"{"key": [null, true, 3.14]}"#).unwrap();
//! assert_eq!(value.get("key").and_then(|v| v.get_index(2)), Some(&Value::Number(3.14)));
//! ```
use bstr::ByteSlice;
use log::trace;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    escape_buffer::UnicodeEscapeBuffer,
    literal_buffer::{ExpectedLiteralBuffer, Step},
    options::ParserOptions,
    value::{Array, Map, Value},
};

/// Bytes that end a run of plain string content: the closing quote, the
/// escape introducer and every control character.
const STRING_SPECIAL: [u8; 34] = {
    let mut set = [0u8; 34];
    let mut b: u8 = 0;
    while b < 0x20 {
        set[b as usize] = b;
        b += 1;
    }
    set[32] = b'"';
    set[33] = b'\\';
    set
};

#[inline]
fn is_structural(b: u8) -> bool {
    matches!(b, b',' | b':' | b'}' | b']')
}

/// A configured JSON parser.
///
/// `Parser` holds only its [`ParserOptions`]; every call to
/// [`parse`](Parser::parse) creates its own cursor, so one parser can be
/// reused and shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a complete JSON document.
    ///
    /// Whitespace around the root value is ignored. Anything else after the
    /// root value fails with [`ErrorKind::TrailingData`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first syntax violation found.
    pub fn parse(&self, input: &str) -> Result<Value, ParseError> {
        trace!(
            "parsing {} bytes with max depth {}",
            input.len(),
            self.options.max_depth
        );

        let mut cur = Cursor::new(input);
        self.skip_whitespace(&mut cur);
        let value = self.parse_value(&mut cur, 0)?;
        self.skip_whitespace(&mut cur);
        if !cur.is_at_end() {
            let found = cur.peek_char().map(format_char).unwrap_or_default();
            return Err(cur.error_with(ErrorKind::TrailingData, format!("found '{found}'")));
        }

        trace!("parsed document of {} bytes", cur.pos());
        Ok(value)
    }

    // ------------------------------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------------------------------

    fn parse_value(&self, cur: &mut Cursor<'_>, depth: usize) -> Result<Value, ParseError> {
        match cur.peek() {
            Some(b'{') => self.parse_object(cur, depth),
            Some(b'[') => self.parse_array(cur, depth),
            Some(b'"') => self.parse_string(cur).map(Value::String),
            Some(b'-' | b'0'..=b'9' | b'.') => parse_number(cur).map(Value::Number),
            Some(first @ (b't' | b'f' | b'n')) => parse_literal(cur, first),
            Some(b) if is_structural(b) => Err(cur.error_with(
                ErrorKind::UnexpectedToken,
                format!("expected a value, found '{}'", b as char),
            )),
            Some(_) => Err(unexpected(cur, "a value")),
            None => Err(cur.error_with(ErrorKind::UnexpectedEndOfInput, "expected a value")),
        }
    }

    /// Accounts for one more level of container nesting.
    fn enter(&self, cur: &Cursor<'_>, depth: usize) -> Result<usize, ParseError> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            return Err(cur.error_with(
                ErrorKind::NestingTooDeep,
                format!("exceeded maximum depth of {}", self.options.max_depth),
            ));
        }
        Ok(depth)
    }

    // ------------------------------------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------------------------------------

    fn parse_object(&self, cur: &mut Cursor<'_>, depth: usize) -> Result<Value, ParseError> {
        let depth = self.enter(cur, depth)?;
        cur.bump(); // '{'
        let mut map = Map::new();

        self.skip_whitespace(cur);
        if cur.peek() == Some(b'}') {
            cur.bump();
            return Ok(Value::Object(map));
        }

        loop {
            match cur.peek() {
                Some(b'"') => {}
                Some(b'}') => {
                    return Err(cur.error_with(ErrorKind::UnexpectedToken, "trailing comma in object"));
                }
                Some(b) if is_structural(b) => {
                    return Err(cur.error_with(
                        ErrorKind::UnexpectedToken,
                        format!("expected a string key, found '{}'", b as char),
                    ));
                }
                Some(_) => return Err(cur.error(ErrorKind::ExpectedKey)),
                None => {
                    return Err(cur.error_with(ErrorKind::UnexpectedEndOfInput, "unterminated object"));
                }
            }

            let key = self.parse_string(cur)?;
            self.skip_whitespace(cur);
            expect(cur, b':')?;
            self.skip_whitespace(cur);
            let value = self.parse_value(cur, depth)?;
            map.insert(key, value);

            self.skip_whitespace(cur);
            match cur.peek() {
                Some(b',') => {
                    cur.bump();
                    self.skip_whitespace(cur);
                }
                Some(b'}') => {
                    cur.bump();
                    return Ok(Value::Object(map));
                }
                _ => return Err(unexpected(cur, "',' or '}'")),
            }
        }
    }

    fn parse_array(&self, cur: &mut Cursor<'_>, depth: usize) -> Result<Value, ParseError> {
        let depth = self.enter(cur, depth)?;
        cur.bump(); // '['
        let mut arr = Array::new();

        self.skip_whitespace(cur);
        if cur.peek() == Some(b']') {
            cur.bump();
            return Ok(Value::Array(arr));
        }

        loop {
            if cur.peek() == Some(b']') {
                return Err(cur.error_with(ErrorKind::UnexpectedToken, "trailing comma in array"));
            }
            arr.push(self.parse_value(cur, depth)?);

            self.skip_whitespace(cur);
            match cur.peek() {
                Some(b',') => {
                    cur.bump();
                    self.skip_whitespace(cur);
                }
                Some(b']') => {
                    cur.bump();
                    return Ok(Value::Array(arr));
                }
                _ => return Err(unexpected(cur, "',' or ']'")),
            }
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Strings
    // ------------------------------------------------------------------------------------------------

    fn parse_string(&self, cur: &mut Cursor<'_>) -> Result<String, ParseError> {
        let start = cur.pos();
        cur.bump(); // opening quote
        let mut out = String::new();
        let mut escapes = UnicodeEscapeBuffer::new();

        loop {
            // A high surrogate escape must be followed directly by its low half.
            if escapes.awaiting_low_surrogate() && !cur.is_at_end() && !cur.rest().starts_with("\\u")
            {
                let detail = escapes.unpaired().map(|e| e.to_string());
                return Err(cur.error_at(ErrorKind::InvalidEscape, cur.pos(), detail));
            }

            // Fast-path: copy the run of plain characters in one go. Every
            // special byte is ASCII, so the run ends on a char boundary.
            let rest = cur.rest();
            let run = rest.as_bytes().find_byteset(STRING_SPECIAL).unwrap_or(rest.len());
            if run > 0 {
                out.push_str(cur.take(run));
                continue;
            }

            match cur.peek() {
                Some(b'"') => {
                    cur.bump();
                    return Ok(out);
                }
                Some(b'\\') => parse_escape(cur, &mut out, &mut escapes)?,
                Some(b) if self.options.allow_control_characters => {
                    out.push(b as char);
                    cur.bump();
                }
                Some(b) => {
                    return Err(cur.error_with(
                        ErrorKind::UnexpectedCharacter,
                        format!(
                            "unescaped control character '{}' in string",
                            format_char(b as char)
                        ),
                    ));
                }
                None => {
                    return Err(cur.error_with(
                        ErrorKind::UnterminatedString,
                        format!("string starting at offset {start} is never closed"),
                    ));
                }
            }
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Whitespace
    // ------------------------------------------------------------------------------------------------

    fn skip_whitespace(&self, cur: &mut Cursor<'_>) {
        loop {
            match cur.peek() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => cur.bump(),
                Some(_) if self.options.allow_unicode_whitespace => match cur.peek_char() {
                    Some(c) if c.is_whitespace() || c == '\u{FEFF}' => {
                        cur.next_char();
                    }
                    _ => return,
                },
                _ => return,
            }
        }
    }
}

/// Decodes one backslash escape, the cursor sitting on the backslash.
fn parse_escape(
    cur: &mut Cursor<'_>,
    out: &mut String,
    escapes: &mut UnicodeEscapeBuffer,
) -> Result<(), ParseError> {
    let start = cur.pos();
    cur.bump(); // '\'
    let Some(c) = cur.next_char() else {
        return Err(cur.error(ErrorKind::UnterminatedString));
    };

    let decoded = match c {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'u' => {
            for _ in 0..4 {
                let Some(h) = cur.next_char() else {
                    return Err(cur.error(ErrorKind::UnterminatedString));
                };
                match escapes.feed(h) {
                    Ok(Some(ch)) => out.push(ch),
                    Ok(None) => {}
                    Err(err) => {
                        return Err(cur.error_at(
                            ErrorKind::InvalidEscape,
                            start,
                            Some(err.to_string()),
                        ));
                    }
                }
            }
            return Ok(());
        }
        other => {
            return Err(cur.error_at(
                ErrorKind::InvalidEscape,
                start,
                Some(format!("unknown escape '\\{}'", format_char(other))),
            ));
        }
    };
    out.push(decoded);
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Numbers
// ------------------------------------------------------------------------------------------------

fn parse_number(cur: &mut Cursor<'_>) -> Result<f64, ParseError> {
    fn digits(cur: &mut Cursor<'_>) -> usize {
        cur.take_while(|b| b.is_ascii_digit()).len()
    }

    let start = cur.pos();

    if cur.peek() == Some(b'-') {
        cur.bump();
    }

    match cur.peek() {
        Some(b'0') => {
            cur.bump();
            if cur.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(cur.error_with(ErrorKind::InvalidNumber, "leading zeros are not allowed"));
            }
        }
        Some(b'1'..=b'9') => {
            digits(cur);
        }
        _ => return Err(cur.error_with(ErrorKind::InvalidNumber, "expected a digit")),
    }

    if cur.peek() == Some(b'.') {
        cur.bump();
        if digits(cur) == 0 {
            return Err(cur.error_with(ErrorKind::InvalidNumber, "expected a digit after '.'"));
        }
    }

    if matches!(cur.peek(), Some(b'e' | b'E')) {
        cur.bump();
        if matches!(cur.peek(), Some(b'+' | b'-')) {
            cur.bump();
        }
        if digits(cur) == 0 {
            return Err(cur.error_with(ErrorKind::InvalidNumber, "expected a digit in exponent"));
        }
    }

    let lexeme = cur.since(start);
    let n = lexeme
        .parse::<f64>()
        .map_err(|e| cur.error_at(ErrorKind::InvalidNumber, start, Some(e.to_string())))?;
    if n.is_infinite() {
        return Err(cur.error_at(
            ErrorKind::InvalidNumber,
            start,
            Some(format!("{lexeme} is out of range")),
        ));
    }
    Ok(n)
}

// ------------------------------------------------------------------------------------------------
// Literals
// ------------------------------------------------------------------------------------------------

fn parse_literal(cur: &mut Cursor<'_>, first: u8) -> Result<Value, ParseError> {
    let mut expected = ExpectedLiteralBuffer::new(first);
    cur.bump();

    loop {
        let step = match cur.peek() {
            Some(b) => expected.step(b),
            None => Step::Reject,
        };
        match step {
            Step::NeedMore => cur.bump(),
            Step::Done(value) => {
                cur.bump();
                return Ok(value);
            }
            Step::Reject => {
                let keyword = expected.expected().map_or("a literal", |kw| kw.keyword());
                return Err(cur.error_with(ErrorKind::InvalidLiteral, format!("expected '{keyword}'")));
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Errors
// ------------------------------------------------------------------------------------------------

/// Consumes `punct` or reports what was found instead.
fn expect(cur: &mut Cursor<'_>, punct: u8) -> Result<(), ParseError> {
    if cur.peek() == Some(punct) {
        cur.bump();
        Ok(())
    } else {
        Err(unexpected(cur, &format!("'{}'", punct as char)))
    }
}

/// Classifies whatever sits at the cursor when `expected` was required.
fn unexpected(cur: &Cursor<'_>, expected: &str) -> ParseError {
    match cur.peek_char() {
        None => cur.error_with(ErrorKind::UnexpectedEndOfInput, format!("expected {expected}")),
        Some(c) => {
            let kind = if c.is_ascii() && is_structural(c as u8) {
                ErrorKind::UnexpectedToken
            } else {
                ErrorKind::UnexpectedCharacter
            };
            cur.error_with(kind, format!("expected {expected}, found '{}'", format_char(c)))
        }
    }
}

fn format_char(c: char) -> String {
    match c {
        '\u{0008}' /* \b */ => "\\b".into(),
        '\u{000C}' /* \f */ => "\\f".into(),
        '\n' => "\\n".into(),
        '\r' => "\\r".into(),
        '\t' => "\\t".into(),
        '\0' => "\\0".into(),
        c if c.is_control() => format!("\\u{:04X}", c as u32),
        c if c.is_whitespace() && !c.is_ascii_whitespace() => format!("\\u{:04X}", c as u32),
        c => c.to_string(),
    }
}
