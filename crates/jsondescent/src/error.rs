//! Error types returned by the parser.
//!
//! Every failure is reported as a [`ParseError`], which pairs an [`ErrorKind`]
//! with the byte offset where the problem was detected and the resolved
//! line/column of that offset.
use core::fmt;

use thiserror::Error;

/// The category of a parse failure.
///
/// Callers can branch on the kind without inspecting the rendered message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No production starts with the character at the current position.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// The input ended in the middle of a value or structure.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A structural token (`,` `:` `}` `]`) appeared where it is not allowed.
    #[error("unexpected token")]
    UnexpectedToken,
    /// An object member did not start with a string key.
    #[error("expected object key")]
    ExpectedKey,
    /// The input ended before the closing quote of a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// A backslash escape was not recognised or carried malformed hex digits.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A numeric literal violated the JSON number grammar or overflowed.
    #[error("invalid number")]
    InvalidNumber,
    /// The text after `t`, `f` or `n` did not spell `true`, `false` or `null`.
    #[error("invalid literal")]
    InvalidLiteral,
    /// A complete value was followed by more non-whitespace input.
    #[error("trailing data after JSON value")]
    TrailingData,
    /// Containers were nested deeper than [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// A failed parse.
///
/// ```
/// use jsondescent::{ErrorKind, parse};
///
/// let err = parse("[1,\n 2,]").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
/// assert_eq!(err.offset(), 7);
/// assert_eq!((err.line(), err.column()), (2, 4));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}{} at line {line}, column {column}", Detail(.message.as_deref()))]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
    line: usize,
    column: usize,
    message: Option<String>,
}

impl ParseError {
    pub(crate) fn new(
        kind: ErrorKind,
        offset: usize,
        (line, column): (usize, usize),
        message: Option<String>,
    ) -> Self {
        Self {
            kind,
            offset,
            line,
            column,
            message,
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the original input at which the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of [`offset`](Self::offset).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of [`offset`](Self::offset), counted in characters.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Additional detail, when the parser has something more specific to say
    /// than the [`ErrorKind`].
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

struct Detail<'a>(Option<&'a str>);

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(msg) => write!(f, ": {msg}"),
            None => Ok(()),
        }
    }
}
