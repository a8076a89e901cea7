use std::error::Error;
use std::fmt;
use std::io;

use crate::value::Kind;

/// The error returned by [`Value::cast`](crate::Value::cast) when the
/// stored kind, or any nested element's kind, does not match the
/// requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeError {
    expected: Kind,
    actual: Kind,
}

impl TypeError {
    pub(crate) fn new(expected: Kind, actual: Kind) -> Self {
        Self { expected, actual }
    }

    /// The kind the requested type expected to find.
    #[must_use]
    pub fn expected(&self) -> Kind {
        self.expected
    }

    /// The kind that was actually stored.
    #[must_use]
    pub fn actual(&self) -> Kind {
        self.actual
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid type: expected {}, found {}",
            self.expected, self.actual
        )
    }
}

impl Error for TypeError {}

/// A structured parse failure with the source position where it occurred.
#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    line: u32,
    column: u32,
}

/// The category of a [`ParseError`].
#[derive(Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input ended before the current value was complete.
    UnexpectedEof,
    /// A token that cannot begin or continue a value.
    UnexpectedToken,
    /// A `null`, `true` or `false` keyword was started but not matched.
    ExpectedKeyword(&'static str),
    /// A numeric literal could not be converted.
    InvalidNumber,
    /// An unknown character followed a backslash in a string.
    InvalidEscape,
    /// A `\u` escape was incomplete or not hexadecimal.
    InvalidCodepoint,
    /// A UTF-16 surrogate escape without its matching half.
    UnpairedSurrogate,
    /// A raw control character inside a string literal.
    ControlCharacter,
    /// A string literal without a closing quote.
    UnterminatedString,
    /// An object entry did not start with a string key.
    ExpectedKey,
    /// An object key was not followed by a colon.
    ExpectedColon,
    /// Two elements or entries without a separating comma.
    ExpectedComma,
    /// A comma directly before a closing bracket or brace.
    TrailingComma,
    /// Non-whitespace input after the top-level value.
    TrailingCharacters,
    /// The underlying reader failed.
    Io(io::Error),
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    pub(crate) fn io(error: io::Error) -> Self {
        Self {
            kind: ParseErrorKind::Io(error),
            line: 0,
            column: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// One-based line of the failure, or 0 for I/O failures.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// One-based column of the failure, or 0 for I/O failures.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedEof => write!(f, "unexpected end of input")?,
            ParseErrorKind::UnexpectedToken => write!(f, "unexpected token")?,
            ParseErrorKind::ExpectedKeyword(keyword) => write!(f, "expected `{keyword}`")?,
            ParseErrorKind::InvalidNumber => write!(f, "number could not be parsed")?,
            ParseErrorKind::InvalidEscape => write!(f, "invalid escape character")?,
            ParseErrorKind::InvalidCodepoint => write!(f, "invalid codepoint in \\u escape")?,
            ParseErrorKind::UnpairedSurrogate => write!(f, "unpaired UTF-16 surrogate")?,
            ParseErrorKind::ControlCharacter => write!(f, "raw control character in string")?,
            ParseErrorKind::UnterminatedString => write!(f, "unterminated string")?,
            ParseErrorKind::ExpectedKey => write!(f, "expected string as object key")?,
            ParseErrorKind::ExpectedColon => write!(f, "missing colon after object key")?,
            ParseErrorKind::ExpectedComma => write!(f, "missing comma")?,
            ParseErrorKind::TrailingComma => write!(f, "extraneous trailing comma")?,
            ParseErrorKind::TrailingCharacters => {
                write!(f, "unexpected characters after the document")?;
            }
            ParseErrorKind::Io(error) => return write!(f, "failed to read input: {error}"),
        }
        write!(f, " at line {} column {}", self.line, self.column)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(error) => Some(error),
            _ => None,
        }
    }
}
