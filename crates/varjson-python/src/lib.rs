//! # varjson-python
//!
//! Python bindings for varjson, built with PyO3.
//!
//! Exposes the following functions to Python as the `varjson_py` module:
//!
//! - `check(text, strict=False)` -- number of variable occurrences
//! - `render(text, strict=False)` -- compact rendering
//! - `variables(text)` -- variable names in document order

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use varjson::{Node, ParseOptions};

fn parse(text: &str, strict: bool) -> PyResult<Node> {
    let options = if strict {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    };
    varjson::parse_with(text, &options).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Validate a document with `$variable` placeholders.
///
/// Args:
///     text: The document text.
///     strict: Reject content after the first value.
///
/// Returns:
///     The number of variable occurrences.
///
/// Raises:
///     ValueError: If the document does not parse.
#[pyfunction]
#[pyo3(signature = (text, strict=false))]
fn check(text: &str, strict: bool) -> PyResult<usize> {
    Ok(parse(text, strict)?.variables().len())
}

/// Parse a document and return its compact rendering.
///
/// Args:
///     text: The document text.
///     strict: Reject content after the first value.
///
/// Returns:
///     The rendered text. Variables are written as `$name`.
///
/// Raises:
///     ValueError: If the document does not parse.
#[pyfunction]
#[pyo3(signature = (text, strict=false))]
fn render(text: &str, strict: bool) -> PyResult<String> {
    Ok(varjson::render(&parse(text, strict)?))
}

/// List variable names in document order, duplicates included.
///
/// Raises:
///     ValueError: If the document does not parse.
#[pyfunction]
fn variables(text: &str) -> PyResult<Vec<String>> {
    let node = parse(text, false)?;
    Ok(node.variables().into_iter().map(str::to_string).collect())
}

/// The `varjson_py` Python module, implemented in Rust via PyO3.
#[pymodule]
fn varjson_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(check, m)?)?;
    m.add_function(wrap_pyfunction!(render, m)?)?;
    m.add_function(wrap_pyfunction!(variables, m)?)?;
    Ok(())
}
