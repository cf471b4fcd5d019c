//! Syntax tree produced by the parser.
//!
//! A [`Node`] mirrors JSON's value types plus a `Variable` case for
//! `$name` placeholders. Trees are plain owned data: built bottom-up by the
//! parser (or the helpers below) and never mutated by this crate afterwards.

use crate::error::ConvertError;
use indexmap::IndexMap;
use serde_json::Value;

/// Object members in insertion order.
///
/// A repeated key keeps the slot of its first occurrence and the value of its
/// last. Equality between two maps ignores order.
pub type Map = IndexMap<String, Node>;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Object(Map),
    Array(Vec<Node>),
    Number(f64),
    String(String),
    Literal(Literal),
    /// A `$name` placeholder. The name excludes the sigil.
    Variable(String),
}

/// The three bare-word JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    /// Look up a bare word; anything other than `true`, `false` or `null` is `None`.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "true" => Some(Literal::True),
            "false" => Some(Literal::False),
            "null" => Some(Literal::Null),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Literal::True => "true",
            Literal::False => "false",
            Literal::Null => "null",
        }
    }

    /// `Some(bool)` for `true`/`false`, `None` for `null`.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Literal::True => Some(true),
            Literal::False => Some(false),
            Literal::Null => None,
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        if b {
            Literal::True
        } else {
            Literal::False
        }
    }
}

impl Node {
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key.into(), value);
        }
        Node::Object(map)
    }

    pub fn array<I: IntoIterator<Item = Node>>(elements: I) -> Self {
        Node::Array(elements.into_iter().collect())
    }

    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::String(value.into())
    }

    /// Build a placeholder. The name is taken as-is; only the parser checks
    /// the identifier rules.
    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    pub fn null() -> Self {
        Node::Literal(Literal::Null)
    }

    pub fn bool(value: bool) -> Self {
        Node::Literal(value.into())
    }

    /// Short lowercase name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Object(_) => "object",
            Node::Array(_) => "array",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Literal(_) => "literal",
            Node::Variable(_) => "variable",
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<Literal> {
        match self {
            Node::Literal(lit) => Some(*lit),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Node::Variable(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(_))
    }

    /// Names of all placeholders in document order, duplicates included.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_variables(self, &mut names);
        names
    }
}

fn collect_variables<'a>(node: &'a Node, names: &mut Vec<&'a str>) {
    match node {
        Node::Object(map) => {
            for value in map.values() {
                collect_variables(value, names);
            }
        }
        Node::Array(elements) => {
            for element in elements {
                collect_variables(element, names);
            }
        }
        Node::Variable(name) => names.push(name),
        Node::Number(_) | Node::String(_) | Node::Literal(_) => {}
    }
}

/// Integers beyond 2^53 lose precision, since every number is stored as `f64`.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::null(),
            Value::Bool(b) => Node::bool(b),
            Value::Number(n) => Node::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(fields) => Node::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Convert a placeholder-free tree to plain JSON.
impl TryFrom<&Node> for Value {
    type Error = ConvertError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        Ok(match node {
            Node::Object(map) => {
                let mut fields = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    fields.insert(key.clone(), Value::try_from(value)?);
                }
                Value::Object(fields)
            }
            Node::Array(elements) => Value::Array(
                elements
                    .iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Node::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .ok_or(ConvertError::NonFiniteNumber(*n))?,
            Node::String(s) => Value::String(s.clone()),
            Node::Literal(Literal::Null) => Value::Null,
            Node::Literal(Literal::True) => Value::Bool(true),
            Node::Literal(Literal::False) => Value::Bool(false),
            Node::Variable(name) => return Err(ConvertError::UnresolvedVariable(name.clone())),
        })
    }
}

impl TryFrom<Node> for Value {
    type Error = ConvertError;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        Value::try_from(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_keeps_first_slot_and_last_value() {
        let node = Node::object([
            ("a", Node::number(1.0)),
            ("b", Node::number(2.0)),
            ("a", Node::number(3.0)),
        ]);
        let map = node.as_object().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map["a"], Node::number(3.0));
    }

    #[test]
    fn variables_in_document_order() {
        let node = Node::object([
            ("x", Node::variable("first")),
            (
                "y",
                Node::array([Node::variable("second"), Node::null(), Node::variable("first")]),
            ),
        ]);
        assert_eq!(node.variables(), ["first", "second", "first"]);
    }

    #[test]
    fn literal_word_table() {
        assert_eq!(Literal::from_word("true"), Some(Literal::True));
        assert_eq!(Literal::from_word("false"), Some(Literal::False));
        assert_eq!(Literal::from_word("null"), Some(Literal::Null));
        assert_eq!(Literal::from_word("True"), None);
        assert_eq!(Literal::Null.as_bool(), None);
        assert_eq!(Literal::from(true).as_str(), "true");
    }

    #[test]
    fn object_equality_ignores_order() {
        let a = Node::object([("a", Node::null()), ("b", Node::bool(true))]);
        let b = Node::object([("b", Node::bool(true)), ("a", Node::null())]);
        assert_eq!(a, b);
    }
}
