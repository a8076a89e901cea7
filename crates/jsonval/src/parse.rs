//! A recursive-descent parser building value trees purely through the
//! public constructors.

use std::io::Read;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};
use crate::value::{Object, Value};

/// Parses a complete JSON document from a string.
///
/// Any value kind is accepted at the top level; non-whitespace input
/// after it is an error.
///
/// ```
/// use jsonval::{json, parse};
///
/// let value = parse(r#"{"a": 1.0, "b": [true, "x"]}"#).unwrap();
/// assert_eq!(value, json!({"a": 1.0, "b": [true, "x"]}));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(parser.error(ParseErrorKind::TrailingCharacters));
    }
    Ok(value)
}

/// Reads the source to the end and parses it as a single document.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Value, ParseError> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(ParseError::io)?;
    parse(&buffer)
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        if let Some(&byte) = self.bytes.get(self.pos) {
            self.pos += 1;
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => self.bump(),
                _ => break,
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error(ParseErrorKind::UnexpectedEof)),
            Some(b'n') => self.expect_keyword("null", Value::Null),
            Some(b't') => self.expect_keyword("true", Value::Bool(true)),
            Some(b'f') => self.expect_keyword("false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'0'..=b'9' | b'+' | b'-') => self.parse_number(),
            Some(_) => Err(self.error(ParseErrorKind::UnexpectedToken)),
        }
    }

    fn expect_keyword(&mut self, keyword: &'static str, value: Value) -> Result<Value, ParseError> {
        if self.bytes[self.pos..].starts_with(keyword.as_bytes()) {
            for _ in 0..keyword.len() {
                self.bump();
            }
            Ok(value)
        } else {
            Err(self.error(ParseErrorKind::ExpectedKeyword(keyword)))
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        let (line, column) = (self.line, self.column);
        while let Some(byte) = self.peek() {
            match byte {
                b'0'..=b'9' | b'e' | b'E' | b'+' | b'-' | b'.' => self.bump(),
                _ => break,
            }
        }
        let literal = &self.input[start..self.pos];
        literal
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, line, column))
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.bump(); // opening quote
        let mut result = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnterminatedString)),
                Some(b'"') => {
                    self.bump();
                    return Ok(result);
                }
                Some(b'\\') => {
                    self.bump();
                    self.parse_escape(&mut result)?;
                }
                Some(byte) if byte < 0x20 => {
                    return Err(self.error(ParseErrorKind::ControlCharacter));
                }
                Some(_) => {
                    // Copy the raw span up to the next quote, escape or
                    // control character in one slice.
                    let start = self.pos;
                    while let Some(byte) = self.peek() {
                        if byte == b'"' || byte == b'\\' || byte < 0x20 {
                            break;
                        }
                        self.bump();
                    }
                    result.push_str(&self.input[start..self.pos]);
                }
            }
        }
    }

    fn parse_escape(&mut self, result: &mut String) -> Result<(), ParseError> {
        let Some(byte) = self.peek() else {
            return Err(self.error(ParseErrorKind::UnterminatedString));
        };
        let unescaped = match byte {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                self.bump();
                let c = self.parse_codepoint()?;
                result.push(c);
                return Ok(());
            }
            _ => return Err(self.error(ParseErrorKind::InvalidEscape)),
        };
        self.bump();
        result.push(unescaped);
        Ok(())
    }

    // Decodes a `\uXXXX` escape, combining UTF-16 surrogate pairs.
    fn parse_codepoint(&mut self) -> Result<char, ParseError> {
        let high = self.parse_hex4()?;
        if !(0xD800..=0xDFFF).contains(&high) {
            return char::from_u32(u32::from(high))
                .ok_or_else(|| self.error(ParseErrorKind::InvalidCodepoint));
        }
        if high >= 0xDC00 {
            return Err(self.error(ParseErrorKind::UnpairedSurrogate));
        }
        if self.peek() != Some(b'\\') {
            return Err(self.error(ParseErrorKind::UnpairedSurrogate));
        }
        self.bump();
        if self.peek() != Some(b'u') {
            return Err(self.error(ParseErrorKind::UnpairedSurrogate));
        }
        self.bump();
        let low = self.parse_hex4()?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(self.error(ParseErrorKind::UnpairedSurrogate));
        }
        let combined =
            0x10000 + ((u32::from(high) - 0xD800) << 10 | (u32::from(low) - 0xDC00));
        char::from_u32(combined).ok_or_else(|| self.error(ParseErrorKind::InvalidCodepoint))
    }

    fn parse_hex4(&mut self) -> Result<u16, ParseError> {
        let mut codepoint: u16 = 0;
        for _ in 0..4 {
            let Some(byte) = self.peek() else {
                return Err(self.error(ParseErrorKind::InvalidCodepoint));
            };
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(self.error(ParseErrorKind::InvalidCodepoint)),
            };
            codepoint = codepoint * 16 + u16::from(digit);
            self.bump();
        }
        Ok(codepoint)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.bump(); // [
        let mut elements = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.bump();
            return Ok(Value::Array(elements));
        }
        loop {
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.peek() == Some(b']') {
                        return Err(self.error(ParseErrorKind::TrailingComma));
                    }
                }
                Some(b']') => {
                    self.bump();
                    return Ok(Value::Array(elements));
                }
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedComma)),
                None => return Err(self.error(ParseErrorKind::UnexpectedEof)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.bump(); // {
        let mut entries = Object::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.bump();
            return Ok(Value::Object(entries));
        }
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'"') => {}
                None => return Err(self.error(ParseErrorKind::UnexpectedEof)),
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedKey)),
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.bump(),
                None => return Err(self.error(ParseErrorKind::UnexpectedEof)),
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedColon)),
            }
            let value = self.parse_value()?;
            // The first occurrence of a duplicate key wins.
            entries.entry(key).or_insert(value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.peek() == Some(b'}') {
                        return Err(self.error(ParseErrorKind::TrailingComma));
                    }
                }
                Some(b'}') => {
                    self.bump();
                    return Ok(Value::Object(entries));
                }
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedComma)),
                None => return Err(self.error(ParseErrorKind::UnexpectedEof)),
            }
        }
    }
}
