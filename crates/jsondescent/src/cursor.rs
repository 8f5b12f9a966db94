//! Forward-only read position over the input text.
//!
//! The [`Cursor`] owns nothing: it borrows the input and tracks a byte offset
//! that only ever moves forward. All lookahead is a single byte or a single
//! `char`; the parser never backtracks.
use bstr::ByteSlice;

use crate::error::{ErrorKind, ParseError};

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset. Always on a char boundary.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances past one ASCII byte. Callers must have peeked it first.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(self.peek().is_some_and(|b| b.is_ascii()));
        self.pos += 1;
    }

    /// Consumes and returns the next character.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `len` bytes and returns them. `len` must land on a char
    /// boundary.
    pub fn take(&mut self, len: usize) -> &'a str {
        let slice = &self.input[self.pos..self.pos + len];
        self.pos += len;
        slice
    }

    /// Consumes the longest run of bytes for which `pred` holds.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let len = self
            .rest()
            .as_bytes()
            .iter()
            .position(|&b| !pred(b))
            .unwrap_or(self.input.len() - self.pos);
        self.take(len)
    }

    /// Slice of the input between `start` and the current position.
    pub fn since(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Resolves a byte offset to a 1-based `(line, column)` pair, with the
    /// column counted in characters.
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let before = &self.input.as_bytes()[..offset.min(self.input.len())];
        let line = before.find_iter("\n").count() + 1;
        let line_start = before.rfind_byte(b'\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    pub fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(kind, self.pos, None)
    }

    pub fn error_with(&self, kind: ErrorKind, msg: impl Into<String>) -> ParseError {
        self.error_at(kind, self.pos, Some(msg.into()))
    }

    pub fn error_at(&self, kind: ErrorKind, offset: usize, msg: Option<String>) -> ParseError {
        ParseError::new(kind, offset, self.line_column(offset), msg)
    }
}
