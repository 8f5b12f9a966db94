/// Default for [`ParserOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the JSON parser.
///
/// These options control how permissive the parser is about whitespace and
/// string contents, and how deeply containers may nest.
///
/// # Examples
///
/// ```rust
/// use jsondescent::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions {
///     max_depth: 4,
///     ..Default::default()
/// });
/// assert_eq!(parser.parse("[[[]]]").unwrap(), Value::Array(vec![Value::Array(vec![Value::Array(vec![])])]));
/// assert!(parser.parse("[[[[[]]]]]").is_err());
/// ```
///
/// # Default
///
/// `max_depth` defaults to [`DEFAULT_MAX_DEPTH`]; all flags default to `false`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of objects and arrays.
    ///
    /// Each production recurses on the call stack, so this bounds stack usage.
    /// Opening a container that would exceed the limit fails with
    /// [`ErrorKind::NestingTooDeep`](crate::ErrorKind::NestingTooDeep).
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,

    /// Whether to allow any Unicode whitespace between tokens.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Whether to accept unescaped control characters (U+0000 to U+001F)
    /// inside strings.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_control_characters: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_unicode_whitespace: false,
            allow_control_characters: false,
        }
    }
}
