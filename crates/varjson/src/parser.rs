//! Recursive-descent parser over the scanner's token stream.
//!
//! Grammar, one token of lookahead, no backtracking:
//!
//! ```text
//! value    := STRING | NUMBER | LITERAL | VARIABLE | object | array
//! object   := '{' '}' | '{' members '}'
//! members  := pair | pair ',' members
//! pair     := STRING ':' value
//! array    := '[' ']' | '[' elements ']'
//! elements := value | value ',' elements
//! ```
//!
//! Nodes are built as soon as their production is recognised. The first
//! lexical or grammar failure aborts the parse.

use crate::error::{ParseError, Result};
use crate::node::{Map, Node};
use crate::options::{ParseOptions, Trailing};
use crate::scanner::{Scanner, Token};

/// Parse `input` with default options.
///
/// The input may be `&str`, `&[u8]`, `Vec<u8>` or anything else that views as bytes.
///
/// ```
/// use varjson::{parse, Node};
///
/// let node = parse(r#"{"user": $userId, "tags": ["a"]}"#).unwrap();
/// assert_eq!(node.as_object().unwrap()["user"], Node::variable("userId"));
/// ```
pub fn parse(input: impl AsRef<[u8]>) -> Result<Node> {
    parse_with(input, &ParseOptions::default())
}

/// Parse `input` with explicit [`ParseOptions`].
pub fn parse_with(input: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Node> {
    let input = input.as_ref();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let result = Parser::new(input, options).parse_document();
    match &result {
        Ok(_) => tracing::trace!(len = input.len(), "parsed document"),
        Err(err) => tracing::debug!(
            kind = ?err.kind(),
            offset = err.offset(),
            message = err.message(),
            "parse failed"
        ),
    }
    result
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    options: &'a ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8], options: &'a ParseOptions) -> Self {
        Parser {
            scanner: Scanner::with_unicode_escapes(input, options.unicode_escapes),
            options,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Node> {
        let first = self.scanner.next_token();
        let root = self.parse_value(first)?;

        if self.options.trailing == Trailing::Reject {
            match self.scanner.next_token() {
                Token::EndOfInput => {}
                Token::LexError(reason) => return Err(self.lex_error(reason)),
                _ => return Err(self.syntax_error("unexpected content after value")),
            }
        }
        Ok(root)
    }

    /// Build a value starting from an already-read token.
    fn parse_value(&mut self, token: Token) -> Result<Node> {
        match token {
            Token::String(s) => Ok(Node::String(s)),
            Token::Number(n) => Ok(Node::Number(n)),
            Token::Literal(lit) => Ok(Node::Literal(lit)),
            Token::Variable(name) => Ok(Node::Variable(name)),
            Token::Punct(b'{') => self.nested(Self::parse_object),
            Token::Punct(b'[') => self.nested(Self::parse_array),
            Token::Punct(b) => Err(self.syntax_error(format!(
                "expected a value, found {}",
                describe_byte(b)
            ))),
            Token::EndOfInput => Err(self.syntax_error("expected a value, found end of input")),
            Token::LexError(reason) => Err(self.lex_error(reason)),
        }
    }

    fn nested(&mut self, body: fn(&mut Self) -> Result<Node>) -> Result<Node> {
        if self.depth >= self.options.max_depth {
            return Err(self.syntax_error(format!(
                "nesting too deep (limit {})",
                self.options.max_depth
            )));
        }
        self.depth += 1;
        let node = body(self);
        self.depth -= 1;
        node
    }

    /// Members of an object whose `{` was just consumed.
    fn parse_object(&mut self) -> Result<Node> {
        let mut map = Map::new();

        let mut token = self.scanner.next_token();
        if token == Token::Punct(b'}') {
            return Ok(Node::Object(map));
        }

        loop {
            let key = match token {
                Token::String(key) => key,
                Token::LexError(reason) => return Err(self.lex_error(reason)),
                other => {
                    return Err(self.syntax_error(format!(
                        "expected a string key, found {}",
                        describe(&other)
                    )))
                }
            };

            self.expect_punct(b':')?;
            let next = self.scanner.next_token();
            let value = self.parse_value(next)?;
            map.insert(key, value);

            match self.scanner.next_token() {
                Token::Punct(b',') => token = self.scanner.next_token(),
                Token::Punct(b'}') => return Ok(Node::Object(map)),
                Token::LexError(reason) => return Err(self.lex_error(reason)),
                other => {
                    return Err(self.syntax_error(format!(
                        "expected `,` or `}}` in object, found {}",
                        describe(&other)
                    )))
                }
            }
        }
    }

    /// Elements of an array whose `[` was just consumed.
    fn parse_array(&mut self) -> Result<Node> {
        let mut elements = Vec::new();

        let mut token = self.scanner.next_token();
        if token == Token::Punct(b']') {
            return Ok(Node::Array(elements));
        }

        loop {
            elements.push(self.parse_value(token)?);

            match self.scanner.next_token() {
                Token::Punct(b',') => token = self.scanner.next_token(),
                Token::Punct(b']') => return Ok(Node::Array(elements)),
                Token::LexError(reason) => return Err(self.lex_error(reason)),
                other => {
                    return Err(self.syntax_error(format!(
                        "expected `,` or `]` in array, found {}",
                        describe(&other)
                    )))
                }
            }
        }
    }

    fn expect_punct(&mut self, expected: u8) -> Result<()> {
        match self.scanner.next_token() {
            Token::Punct(b) if b == expected => Ok(()),
            Token::LexError(reason) => Err(self.lex_error(reason)),
            other => Err(self.syntax_error(format!(
                "expected `{}`, found {}",
                expected as char,
                describe(&other)
            ))),
        }
    }

    fn lex_error(&self, reason: &str) -> ParseError {
        ParseError::lex(self.scanner.input(), self.scanner.token_start(), reason)
    }

    fn syntax_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::syntax(self.scanner.input(), self.scanner.token_start(), message)
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::String(_) => "a string".to_string(),
        Token::Number(_) => "a number".to_string(),
        Token::Literal(lit) => format!("`{}`", lit.as_str()),
        Token::Variable(name) => format!("variable `${name}`"),
        Token::Punct(b) => describe_byte(*b),
        Token::EndOfInput => "end of input".to_string(),
        Token::LexError(reason) => reason.to_string(),
    }
}

fn describe_byte(b: u8) -> String {
    if b.is_ascii_graphic() {
        format!("`{}`", b as char)
    } else {
        format!("byte 0x{b:02x}")
    }
}
