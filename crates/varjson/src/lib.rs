//! # varjson
//!
//! Parser and renderer for **JSON with variable references**: anywhere a JSON
//! value may appear, a `$name` placeholder may appear instead. The text is
//! parsed into a [`Node`] tree which can be inspected, handed to whatever
//! substitutes the placeholders, and rendered back to text.
//!
//! ## Quick start
//!
//! ```rust
//! use varjson::{parse, render, Node};
//!
//! let tree = parse(r#"{"name": $userName, "limit": 10}"#).unwrap();
//! assert_eq!(tree.variables(), ["userName"]);
//!
//! let fields = tree.as_object().unwrap();
//! assert_eq!(fields["limit"], Node::number(10.0));
//!
//! assert_eq!(render(&tree), r#"{"name":$userName,"limit":10}"#);
//! ```
//!
//! Rendered output containing a variable is not valid JSON on its own; it
//! re-parses with this crate only.
//!
//! ## Modules
//!
//! - [`scanner`] — bytes → tokens
//! - [`parser`] — tokens → [`Node`] tree (`parse`, `parse_with`)
//! - [`node`] — the tree and its construction helpers
//! - [`render`](mod@render) — tree → compact text
//! - [`options`] — per-call parser settings
//! - [`error`] — error types for parse and conversion failures

pub mod error;
pub mod node;
pub mod options;
pub mod parser;
pub mod render;
pub mod scanner;

pub use error::{ConvertError, ErrorKind, ParseError, Result};
pub use node::{Literal, Map, Node};
pub use options::{ParseOptions, Trailing, UnicodeEscapes};
pub use parser::{parse, parse_with};
pub use render::{render, render_into};
pub use scanner::{Scanner, Token};
