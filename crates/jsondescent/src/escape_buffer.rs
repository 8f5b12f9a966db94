//! Decoding of `\uXXXX` escape sequences.
//!
//! The [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit as they arrive. Code
//! units outside the surrogate range decode straight to a [`char`]. A high
//! surrogate is held back until the following escape supplies the low half,
//! and the pair is combined into a single supplementary-plane character.
//!
//! # Errors
//!
//! - Feeding a non-hexadecimal character returns
//!   [`EscapeError::InvalidHexDigit`].
//! - A high surrogate followed by anything other than a low surrogate returns
//!   [`EscapeError::UnpairedHighSurrogate`].
//! - A low surrogate with no preceding high surrogate returns
//!   [`EscapeError::UnpairedLowSurrogate`].
use thiserror::Error;

const HIGH_SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeError {
    #[error("invalid hex digit '{0}' in unicode escape")]
    InvalidHexDigit(char),
    #[error("unpaired high surrogate \\u{0:04X}")]
    UnpairedHighSurrogate(u32),
    #[error("unpaired low surrogate \\u{0:04X}")]
    UnpairedLowSurrogate(u32),
}

#[derive(Debug, Default)]
/// Accumulates hexadecimal digits of `\u` escapes and decodes them into
/// characters, joining surrogate pairs.
pub(crate) struct UnicodeEscapeBuffer {
    acc: u32,
    len: u8,
    high_surrogate: Option<u32>,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while a high surrogate waits for its low half. The next escape
    /// in the input must be another `\u`.
    pub fn awaiting_low_surrogate(&self) -> bool {
        self.high_surrogate.is_some()
    }

    /// Returns the pending high surrogate as an error, clearing it. Used when
    /// the input continues with something other than `\u`.
    pub fn unpaired(&mut self) -> Option<EscapeError> {
        self.high_surrogate
            .take()
            .map(EscapeError::UnpairedHighSurrogate)
    }

    #[inline]
    fn hex_val(c: char) -> Option<u32> {
        c.to_digit(16)
    }

    /// Feeds a single ASCII hexadecimal digit into the buffer.
    ///
    /// - Returns `Ok(None)` if fewer than four digits of the current escape
    ///   have been provided, or if the escape decoded to a high surrogate.
    /// - Returns `Ok(Some(ch))` once an escape (or surrogate pair) is
    ///   complete.
    pub fn feed(&mut self, c: char) -> Result<Option<char>, EscapeError> {
        let d = Self::hex_val(c).ok_or(EscapeError::InvalidHexDigit(c))?;
        debug_assert!(self.len < 4);

        self.acc = (self.acc << 4) | d;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }

        let code = self.acc;
        self.acc = 0;
        self.len = 0;

        match self.high_surrogate.take() {
            Some(high) if LOW_SURROGATES.contains(&code) => {
                let combined = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                Ok(char::from_u32(combined))
            }
            Some(high) => Err(EscapeError::UnpairedHighSurrogate(high)),
            None if HIGH_SURROGATES.contains(&code) => {
                self.high_surrogate = Some(code);
                Ok(None)
            }
            None if LOW_SURROGATES.contains(&code) => Err(EscapeError::UnpairedLowSurrogate(code)),
            None => Ok(char::from_u32(code)),
        }
    }
}
