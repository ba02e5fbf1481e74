//! Lenient JSON decoder — converts JSON text into a [`Value`] tree.
//!
//! The decoder is a recursive-descent walker over a forward-only cursor. It
//! accepts a deliberately lenient dialect of JSON:
//!
//! - Separators are optional: a missing comma between members/elements and a
//!   trailing comma before `}`/`]` both parse.
//! - Only object and array roots are accepted; a bare scalar at the root is
//!   rejected.
//! - Numbers are unsigned decimal: no leading `-`, no exponent notation. A
//!   token without a decimal point decodes to `Integer`, with one to `Float`.
//! - String escapes are limited to `\\`, `\n`, `\r`, `\t`, `\"`. Unicode
//!   escapes (`\uXXXX`) are not supported.
//!
//! These leniencies and omissions are part of the contract, pinned by the
//! integration tests, and must not be silently tightened or extended.
//!
//! # Key design decisions
//!
//! - **Index cursor over decoded scalars**: the input is decoded once into a
//!   `Vec<char>` and every routine advances a single index. No re-slicing,
//!   no backtracking, and multi-byte characters are handled uniformly.
//! - **Depth guard**: recursion mirrors input nesting, so a counter is
//!   threaded through object/array entry and fails with `NestingTooDeep`
//!   past [`DecodeOptions::max_depth`], bounding stack usage against
//!   adversarial input.
//! - **Fail-fast**: every routine returns at its first error via `?`; there
//!   is no recovery and no partially decoded result.

use std::collections::HashMap;

use crate::error::{ParseError, Result};
use crate::types::Value;

/// Nesting limit used by [`decode`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for a decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum object/array nesting depth before the decoder gives up with
    /// [`ParseError::NestingTooDeep`]. The root container counts as depth 1.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decode a JSON document into a [`Value`] tree with default options.
///
/// The returned tree owns all of its data; nothing references the input
/// buffer after the call returns.
///
/// ```rust
/// use lax_json::{decode, Value};
///
/// let doc = decode(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
/// assert_eq!(doc.get("name").and_then(Value::as_str), Some("Alice"));
/// assert_eq!(doc.get("scores").and_then(Value::as_array).map(<[Value]>::len), Some(3));
/// ```
pub fn decode(input: &str) -> Result<Value> {
    decode_with_options(input, DecodeOptions::default())
}

/// Decode a JSON document with an explicit nesting limit.
pub fn decode_with_options(input: &str, options: DecodeOptions) -> Result<Value> {
    Decoder::new(input, options).parse_document()
}

/// Call-local decoding state: the decoded input, a forward-only index into
/// it, and the current nesting depth.
struct Decoder {
    buf: Vec<char>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl Decoder {
    fn new(input: &str, options: DecodeOptions) -> Self {
        Self {
            buf: input.chars().collect(),
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Entry point: skip leading whitespace, then require an object or array
    /// root. Anything after the root value's trailing whitespace is ignored.
    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::InvalidInput),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(other) => Err(ParseError::UnexpectedCharacter(other)),
        }
    }

    /// Dispatch on the next significant character to the matching reader.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some('t') | Some('f') | Some('n') => self.parse_literal(),
            Some(c) if is_number_char(c) => self.parse_number(),
            Some('"') => self.parse_string().map(Value::String),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(other) => Err(ParseError::UnexpectedCharacter(other)),
        }
    }

    /// Decode `{ "key" : value , ... }` into an object, leaving the cursor
    /// past the closing `}` and any trailing whitespace.
    ///
    /// The separator after a member is optional: absent a comma, the loop
    /// tries to read the next key from the current position, which also makes
    /// a trailing comma before `}` harmless — both paths converge on the same
    /// termination check.
    fn parse_object(&mut self) -> Result<Value> {
        self.descend()?;
        self.bump();
        self.skip_whitespace();

        let mut members = HashMap::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEnd),
                Some('}') => break,
                Some(_) => {}
            }

            let key = self.parse_string()?;

            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::UnexpectedEnd),
                Some(':') => {
                    self.bump();
                }
                Some(_) => return Err(ParseError::MissingColon),
            }

            let value = self.parse_value()?;
            // Repeated keys overwrite: last write wins.
            members.insert(key, value);

            self.skip_whitespace();
            if self.peek().is_none() {
                return Err(ParseError::UnexpectedEnd);
            }
            if self.peek() == Some(',') {
                self.bump();
                self.skip_whitespace();
            }
        }
        self.bump();
        self.skip_whitespace();

        self.ascend();
        Ok(Value::Object(members))
    }

    /// Decode `[ value , ... ]` into an array. Same optional-separator
    /// behavior as [`Decoder::parse_object`], without keys.
    fn parse_array(&mut self) -> Result<Value> {
        self.descend()?;
        self.bump();
        self.skip_whitespace();

        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEnd),
                Some(']') => break,
                Some(_) => {}
            }

            items.push(self.parse_value()?);

            self.skip_whitespace();
            if self.peek().is_none() {
                return Err(ParseError::UnexpectedEnd);
            }
            if self.peek() == Some(',') {
                self.bump();
                self.skip_whitespace();
            }
        }
        self.bump();
        self.skip_whitespace();

        self.ascend();
        Ok(Value::Array(items))
    }

    /// Decode a quoted string literal, cursor on the opening `"`.
    fn parse_string(&mut self) -> Result<String> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some('"') => {
                self.bump();
                self.read_string_body()
            }
            Some(other) => Err(ParseError::ExpectedString(other)),
        }
    }

    /// Consume characters up to the unescaped closing `"`, decoding the five
    /// supported escapes along the way. Characters are copied out, never
    /// referenced.
    fn read_string_body(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(ParseError::UnexpectedEnd),
                Some('"') => return Ok(text),
                Some('\\') => match self.bump() {
                    None => return Err(ParseError::UnexpectedEnd),
                    Some('\\') => text.push('\\'),
                    Some('n') => text.push('\n'),
                    Some('"') => text.push('"'),
                    Some('r') => text.push('\r'),
                    Some('t') => text.push('\t'),
                    Some(other) => return Err(ParseError::InvalidEscape(other)),
                },
                Some(c) => text.push(c),
            }
        }
    }

    /// Read a bare keyword token and match it against `true`/`false`/`null`.
    fn parse_literal(&mut self) -> Result<Value> {
        let token = self.read_bare_token()?;
        match token.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            _ => Err(ParseError::InvalidLiteral(token)),
        }
    }

    /// Maximal run of characters up to (not including) the next `,`, `}`,
    /// `]`, or whitespace. Tokens always sit inside a structure, so running
    /// out of input before a terminator is an error.
    fn read_bare_token(&mut self) -> Result<String> {
        let mut token = String::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEnd),
                Some(',') | Some('}') | Some(']') => return Ok(token),
                Some(c) if is_whitespace(c) => return Ok(token),
                Some(c) => {
                    token.push(c);
                    self.bump();
                }
            }
        }
    }

    /// Read a maximal run of digits and dots. At most one dot is permitted:
    /// no dot decodes as `Integer`, one dot as `Float`, a second dot fails.
    fn parse_number(&mut self) -> Result<Value> {
        let mut text = String::new();
        let mut seen_dot = false;
        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEnd),
                Some(c) if is_number_char(c) => {
                    if c == '.' {
                        if seen_dot {
                            return Err(ParseError::MalformedNumber);
                        }
                        seen_dot = true;
                    }
                    text.push(c);
                    self.bump();
                }
                Some(_) => break,
            }
        }
        if seen_dot {
            // Covers degenerate runs like a lone "." as well.
            text.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ParseError::MalformedNumber)
        } else {
            // i64 overflow surfaces as the same kind.
            text.parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ParseError::MalformedNumber)
        }
    }

    /// Advance past spaces, tabs, newlines, and carriage returns.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.buf.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep(self.max_depth));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

/// Number tokens are runs of ASCII digits and `.` — no sign, no exponent.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
