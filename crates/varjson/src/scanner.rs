//! Byte-level tokenizer.
//!
//! The scanner is pull-based: each [`Scanner::next_token`] call skips
//! whitespace, dispatches on the first remaining byte and consumes exactly one
//! token. Lexical failures are not Rust errors here; they come back as
//! [`Token::LexError`] so the parser decides how to report them.
//!
//! # Token classes
//!
//! - `"` starts a string. Named escapes are decoded; `\uXXXX` is either kept
//!   verbatim or decoded depending on [`UnicodeEscapes`].
//! - A digit, `+` or `-` starts a number. The scanner grabs the longest run
//!   of digits and `.+-eE`, then hands the whole run to the float parser, so
//!   `1+2` is one rejected token rather than three.
//! - An ASCII letter starts a bare word, which must be `true`, `false` or `null`.
//! - `$` starts a variable: `[A-Za-z][A-Za-z0-9_-]*`.
//! - Anything else is returned as a single punctuation byte.

use crate::node::Literal;
use crate::options::UnicodeEscapes;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Decoded string contents.
    String(String),
    Number(f64),
    Literal(Literal),
    /// Variable name without the `$`.
    Variable(String),
    /// Any single byte that starts no other token (`{ } [ ] : ,` and the rest).
    Punct(u8),
    EndOfInput,
    /// The bytes at [`Scanner::token_start`] do not form a valid token.
    LexError(&'static str),
}

pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    token_start: usize,
    unicode_escapes: UnicodeEscapes,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_unicode_escapes(input, UnicodeEscapes::default())
    }

    pub fn with_unicode_escapes(input: &'a [u8], unicode_escapes: UnicodeEscapes) -> Self {
        Scanner {
            input,
            pos: 0,
            token_start: 0,
            unicode_escapes,
        }
    }

    /// Cursor position: the byte offset just past the last consumed byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset where the most recently returned token began.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume the longest run of bytes matching `pred` and return it.
    ///
    /// Stops in front of the first non-matching byte, which is left for the
    /// next dispatch.
    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let input = self.input;
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &input[start..self.pos]
    }

    /// Read the next token.
    pub fn next_token(&mut self) -> Token {
        self.take_while(is_space);
        self.token_start = self.pos;

        let Some(b) = self.peek() else {
            return Token::EndOfInput;
        };
        match b {
            b'"' => {
                self.pos += 1;
                self.scan_string()
            }
            b'0'..=b'9' | b'+' | b'-' => self.scan_number(),
            b if b.is_ascii_alphabetic() => self.scan_literal(),
            b'$' => {
                self.pos += 1;
                self.scan_variable()
            }
            other => {
                self.pos += 1;
                Token::Punct(other)
            }
        }
    }

    fn scan_string(&mut self) -> Token {
        let mut buf = Vec::new();
        loop {
            let Some(b) = self.bump() else {
                return Token::LexError("unterminated string");
            };
            match b {
                b'"' => break,
                b'\\' => {
                    let Some(esc) = self.bump() else {
                        return Token::LexError("unterminated escape sequence");
                    };
                    if esc == b'u' {
                        if let Err(reason) = self.scan_unicode_escape(&mut buf) {
                            return Token::LexError(reason);
                        }
                        continue;
                    }
                    match decode_escape(esc) {
                        Some(decoded) => buf.push(decoded),
                        None => return Token::LexError("invalid escape sequence"),
                    }
                }
                _ => buf.push(b),
            }
        }
        match String::from_utf8(buf) {
            Ok(s) => Token::String(s),
            Err(_) => Token::LexError("string is not valid UTF-8"),
        }
    }

    /// Handle a `\u` escape whose backslash and `u` are already consumed.
    fn scan_unicode_escape(&mut self, buf: &mut Vec<u8>) -> Result<(), &'static str> {
        match self.unicode_escapes {
            UnicodeEscapes::Verbatim => {
                buf.extend_from_slice(b"\\u");
                for _ in 0..4 {
                    match self.bump() {
                        Some(b @ (b'0'..=b'9' | b'a'..=b'z')) => buf.push(b),
                        _ => return Err("invalid unicode escape"),
                    }
                }
                Ok(())
            }
            UnicodeEscapes::Decode => {
                let unit = self.hex_unit()?;
                let code = match unit {
                    0xD800..=0xDBFF => {
                        if self.bump() != Some(b'\\') || self.bump() != Some(b'u') {
                            return Err("unpaired surrogate in unicode escape");
                        }
                        let low = self.hex_unit()?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err("unpaired surrogate in unicode escape");
                        }
                        0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
                    }
                    0xDC00..=0xDFFF => return Err("unpaired surrogate in unicode escape"),
                    _ => u32::from(unit),
                };
                let c = char::from_u32(code).ok_or("invalid unicode escape")?;
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                Ok(())
            }
        }
    }

    fn hex_unit(&mut self) -> Result<u16, &'static str> {
        let mut unit = 0u16;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or("invalid unicode escape")?;
            unit = (unit << 4) | digit as u16;
        }
        Ok(unit)
    }

    fn scan_number(&mut self) -> Token {
        let run = self.take_while(is_number_byte);
        // The run is pure ASCII by construction.
        let text = std::str::from_utf8(run).unwrap_or_default();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Token::Number(value),
            Ok(_) => Token::LexError("number out of range"),
            Err(_) => Token::LexError("invalid number"),
        }
    }

    fn scan_literal(&mut self) -> Token {
        let run = self.take_while(|b| (b as char).is_alphabetic());
        std::str::from_utf8(run)
            .ok()
            .and_then(Literal::from_word)
            .map_or(Token::LexError("unknown literal"), Token::Literal)
    }

    fn scan_variable(&mut self) -> Token {
        let run = self.take_while(is_variable_byte);
        match run.first() {
            Some(first) if first.is_ascii_alphabetic() => {
                Token::Variable(String::from_utf8_lossy(run).into_owned())
            }
            Some(_) => Token::LexError("variable name must start with a letter"),
            None => Token::LexError("empty variable name"),
        }
    }
}

/// Yields every token up to, but not including, [`Token::EndOfInput`].
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some(token),
        }
    }
}

fn decode_escape(esc: u8) -> Option<u8> {
    Some(match esc {
        b'"' => b'"',
        b'\\' => b'\\',
        b'/' => b'/',
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        _ => return None,
    })
}

/// Whitespace, with each byte read as a Latin-1 code point (so 0x85 and 0xA0 count).
fn is_space(b: u8) -> bool {
    (b as char).is_whitespace()
}

fn is_number_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'.' | b'+' | b'-' | b'e' | b'E')
}

fn is_variable_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}
