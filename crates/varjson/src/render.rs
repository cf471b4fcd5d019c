//! Tree → text.
//!
//! Output is compact (no whitespace) and deterministic: object members come
//! out in insertion order. Variables are written as `$name`, which makes the
//! output unreadable to a plain JSON parser whenever the tree contains one.

use crate::node::Node;
use std::fmt::{self, Write};

/// Render `node` to a new string.
///
/// ```
/// use varjson::{parse, render};
///
/// let node = parse(r#"{ "id" : $id , "n": [1, 2.5e-7] }"#).unwrap();
/// assert_eq!(render(&node), r#"{"id":$id,"n":[1,2.5e-07]}"#);
/// ```
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

/// Append the rendering of `node` to `out`.
pub fn render_into(node: &Node, out: &mut String) {
    match node {
        Node::Object(map) => {
            out.push('{');
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_quoted(key, out);
                out.push(':');
                render_into(value, out);
            }
            out.push('}');
        }
        Node::Array(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_into(element, out);
            }
            out.push(']');
        }
        Node::Number(n) => write_number(*n, out),
        Node::String(s) => write_quoted(s, out),
        Node::Literal(lit) => out.push_str(lit.as_str()),
        Node::Variable(name) => {
            out.push('$');
            out.push_str(name);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Shortest round-trip digits, `%g` style. Decimal exponents below -4 or
/// at/above 6 switch to scientific form with a signed, at least two-digit
/// exponent (`1e+06`, `2.5e-07`).
fn write_number(value: f64, out: &mut String) {
    if !value.is_finite() || value == 0.0 {
        // Display gives "0", "-0", "NaN" and "inf" here.
        let _ = write!(out, "{value}");
        return;
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        let _ = write!(out, "{value}");
        return;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if (-4..6).contains(&exponent) {
        let _ = write!(out, "{value}");
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }
}

/// Quote `s`: `"` and `\` are escaped, control characters use the named
/// escape when there is one and `\u00xx` otherwise. Everything else,
/// non-ASCII included, is copied as-is.
fn write_quoted(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(n: f64) -> String {
        let mut out = String::new();
        write_number(n, &mut out);
        out
    }

    fn quoted(s: &str) -> String {
        let mut out = String::new();
        write_quoted(s, &mut out);
        out
    }

    #[test]
    fn numbers_switch_to_exponent_outside_range() {
        assert_eq!(number(1.0), "1");
        assert_eq!(number(-2.5), "-2.5");
        assert_eq!(number(0.0001), "0.0001");
        assert_eq!(number(0.00001), "1e-05");
        assert_eq!(number(123456.0), "123456");
        assert_eq!(number(999999.5), "999999.5");
        assert_eq!(number(1e6), "1e+06");
        assert_eq!(number(1234567.0), "1.234567e+06");
        assert_eq!(number(1e20), "1e+20");
        assert_eq!(number(1e21), "1e+21");
        assert_eq!(number(1234.56e-20), "1.23456e-17");
        assert_eq!(number(-1.5e300), "-1.5e+300");
    }

    #[test]
    fn zero_keeps_sign() {
        assert_eq!(number(0.0), "0");
        assert_eq!(number(-0.0), "-0");
    }

    #[test]
    fn quoting_escapes_controls_only() {
        assert_eq!(quoted("plain"), r#""plain""#);
        assert_eq!(quoted("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(quoted("\u{08}\u{0c}\n\r\t"), r#""\b\f\n\r\t""#);
        assert_eq!(quoted("\u{1b}\u{7f}"), r#""\u001b\u007f""#);
        assert_eq!(quoted("上学/é"), "\"上学/é\"");
    }
}
