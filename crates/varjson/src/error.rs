//! Error types for parsing and tree conversion.

use thiserror::Error;

/// Number of bytes captured on each side of a failure when building
/// [`ParseError`] context.
pub const CONTEXT_RADIUS: usize = 100;

/// Errors that can occur while turning input bytes into a [`Node`](crate::Node) tree.
///
/// Parsing stops at the first failure; there is no partial tree and no
/// multi-error reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input had zero length.
    #[error("input is empty")]
    EmptyInput,

    /// A token could not be classified, or violated its escape/number/name rules.
    #[error("lexical error at byte {offset}: {context} - {message}")]
    Lex {
        offset: usize,
        context: String,
        message: String,
    },

    /// The tokens did not satisfy the grammar at `offset`.
    #[error("syntax error at byte {offset}: {context} - {message}")]
    Syntax {
        offset: usize,
        context: String,
        message: String,
    },
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    Lex,
    Syntax,
}

impl ParseError {
    pub(crate) fn lex(input: &[u8], offset: usize, message: impl Into<String>) -> Self {
        ParseError::Lex {
            offset,
            context: snippet(input, offset),
            message: message.into(),
        }
    }

    pub(crate) fn syntax(input: &[u8], offset: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            offset,
            context: snippet(input, offset),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::EmptyInput => ErrorKind::EmptyInput,
            ParseError::Lex { .. } => ErrorKind::Lex,
            ParseError::Syntax { .. } => ErrorKind::Syntax,
        }
    }

    /// Byte offset of the offending token.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::Lex { offset, .. } | ParseError::Syntax { offset, .. } => Some(*offset),
        }
    }

    /// Input text surrounding the failure.
    pub fn context(&self) -> Option<&str> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::Lex { context, .. } | ParseError::Syntax { context, .. } => Some(context),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::Lex { message, .. } | ParseError::Syntax { message, .. } => Some(message),
        }
    }
}

/// Slice `CONTEXT_RADIUS` bytes on either side of `offset`, clamped to the input.
///
/// The window may split a multi-byte character; those bytes are replaced
/// rather than rejected.
fn snippet(input: &[u8], offset: usize) -> String {
    let offset = offset.min(input.len());
    let start = offset.saturating_sub(CONTEXT_RADIUS);
    let end = offset.saturating_add(CONTEXT_RADIUS).min(input.len());
    String::from_utf8_lossy(&input[start..end]).into_owned()
}

/// Errors converting a [`Node`](crate::Node) into a plain `serde_json::Value`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Plain JSON has no representation for a placeholder.
    #[error("unresolved variable `${0}`")]
    UnresolvedVariable(String),

    #[error("number {0} is not finite")]
    NonFiniteNumber(f64),
}

/// Convenience alias used throughout varjson.
pub type Result<T> = std::result::Result<T, ParseError>;
