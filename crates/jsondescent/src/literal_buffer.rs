//! Byte-at-a-time matcher for the `null`, `true` and `false` keywords.
use crate::value::Value;

/// The keyword a literal resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedLiteralValue {
    Null,
    True,
    False,
}

impl ExpectedLiteralValue {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::Boolean(true),
            Self::False => Value::Boolean(false),
        }
    }
}

/// Outcome of offering one byte to an [`ExpectedLiteralBuffer`].
pub enum Step {
    /// Matched; more bytes are needed.
    NeedMore,
    /// Matched the final byte.
    Done(Value),
    /// Mismatch. The buffer is left unchanged.
    Reject,
}

/// Remaining keyword bytes plus the keyword they spell, or `None` when the
/// first byte did not start a keyword.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExpectedLiteralBuffer(Option<(&'static [u8], ExpectedLiteralValue)>);

impl ExpectedLiteralBuffer {
    /// Starts matching after the already-consumed first byte.
    pub fn new(first: u8) -> Self {
        Self(match first {
            b'n' => Some((b"ull", ExpectedLiteralValue::Null)),
            b't' => Some((b"rue", ExpectedLiteralValue::True)),
            b'f' => Some((b"alse", ExpectedLiteralValue::False)),
            _ => None,
        })
    }

    pub fn expected(&self) -> Option<ExpectedLiteralValue> {
        self.0.map(|(_, kind)| kind)
    }

    pub fn step(&mut self, b: u8) -> Step {
        let Some((remaining, kind)) = self.0 else {
            return Step::Reject;
        };

        match remaining.split_first() {
            Some((&want, [])) if want == b => Step::Done(kind.into_value()),
            Some((&want, rest)) if want == b => {
                self.0 = Some((rest, kind));
                Step::NeedMore
            }
            _ => Step::Reject,
        }
    }
}
