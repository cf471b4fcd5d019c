//! Per-call parser settings.
//!
//! There is no global or file-based configuration: every knob lives on
//! [`ParseOptions`], which is `Copy` and cheap to pass around.

/// Default limit on nested objects/arrays.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// What to do with tokens left over after the first complete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trailing {
    /// Stop after the first value and never look at the rest of the input.
    #[default]
    Ignore,
    /// Anything but end-of-input after the value is an error.
    Reject,
}

/// How `\uXXXX` escapes inside strings are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnicodeEscapes {
    /// Copy `\u` and the four body characters into the string untouched.
    /// Body characters must be `0-9` or `a-z`.
    #[default]
    Verbatim,
    /// Decode the escape to its character. The body must be hexadecimal and
    /// surrogates must come in high/low pairs.
    Decode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub trailing: Trailing,
    pub unicode_escapes: UnicodeEscapes,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            trailing: Trailing::Ignore,
            unicode_escapes: UnicodeEscapes::Verbatim,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Whole-input validation: trailing tokens are rejected.
    pub fn strict() -> Self {
        ParseOptions {
            trailing: Trailing::Reject,
            ..ParseOptions::default()
        }
    }

    pub fn with_trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_unicode_escapes(mut self, mode: UnicodeEscapes) -> Self {
        self.unicode_escapes = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
