use serde_json::{json, Value};
use varjson::{parse, render, ConvertError, Node};

// ============================================================================
// serde_json::Value -> Node
// ============================================================================

#[test]
fn from_value_preserves_structure_and_order() {
    let value = json!({"z": [1, 2.5, "s"], "a": {"t": true, "n": null}});
    let node = Node::from(value);
    assert_eq!(render(&node), r#"{"z":[1,2.5,"s"],"a":{"t":true,"n":null}}"#);
}

#[test]
fn from_value_matches_parse() {
    let text = r#"{"name":"Alice","scores":[95,87,92],"meta":{"ok":false}}"#;
    let value: Value = serde_json::from_str(text).unwrap();
    assert_eq!(Node::from(value), parse(text).unwrap());
}

// ============================================================================
// Node -> serde_json::Value
// ============================================================================

#[test]
fn try_into_value_without_variables() {
    let node = parse(r#"{"a": [1, "two", null, true]}"#).unwrap();
    let value = Value::try_from(&node).unwrap();
    assert_eq!(value, json!({"a": [1.0, "two", null, true]}));
}

#[test]
fn try_into_value_reports_first_variable() {
    let node = parse(r#"{"a": 1, "b": [$first, $second]}"#).unwrap();
    assert_eq!(
        Value::try_from(node),
        Err(ConvertError::UnresolvedVariable("first".to_string()))
    );
}

#[test]
fn try_into_value_rejects_non_finite_number() {
    let node = Node::array([Node::number(f64::INFINITY)]);
    assert!(matches!(
        Value::try_from(&node),
        Err(ConvertError::NonFiniteNumber(n)) if n.is_infinite()
    ));
}

#[test]
fn convert_error_messages() {
    assert_eq!(
        ConvertError::UnresolvedVariable("id".into()).to_string(),
        "unresolved variable `$id`"
    );
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn accessors_match_variant() {
    let node = parse(r#"[{"k": 1}, [], 2, "s", true, $v]"#).unwrap();
    let items = node.as_array().unwrap();
    assert!(items[0].as_object().is_some());
    assert_eq!(items[1].as_array(), Some(&[][..]));
    assert_eq!(items[2].as_f64(), Some(2.0));
    assert_eq!(items[3].as_str(), Some("s"));
    assert_eq!(items[4].as_literal().and_then(|l| l.as_bool()), Some(true));
    assert_eq!(items[5].as_variable(), Some("v"));
    assert!(items[5].is_variable());
    assert!(!items[3].is_variable());
    assert_eq!(items[0].as_str(), None);
}

#[test]
fn kind_names() {
    let kinds: Vec<&str> = parse(r#"[{}, [], 1, "", null, $x]"#)
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(Node::kind)
        .collect();
    assert_eq!(
        kinds,
        ["object", "array", "number", "string", "literal", "variable"]
    );
}
