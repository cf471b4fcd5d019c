//! WASM bindings for varjson.
//!
//! Exposes `check`, `render` and `variables` as `#[wasm_bindgen]` functions
//! callable from JavaScript/TypeScript. Parse failures are thrown as JS
//! errors carrying the parser's message and input context.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p varjson-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/varjson-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/varjson_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

fn to_js(err: varjson::ParseError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Validate a document. Returns the number of variable occurrences.
#[wasm_bindgen]
pub fn check(input: &str) -> std::result::Result<usize, JsValue> {
    let node = varjson::parse(input).map_err(to_js)?;
    Ok(node.variables().len())
}

/// Parse a document and return its compact rendering.
#[wasm_bindgen]
pub fn render(input: &str) -> std::result::Result<String, JsValue> {
    varjson::parse(input)
        .map(|node| varjson::render(&node))
        .map_err(to_js)
}

/// Names of every variable in document order.
#[wasm_bindgen]
pub fn variables(input: &str) -> std::result::Result<Vec<String>, JsValue> {
    let node = varjson::parse(input).map_err(to_js)?;
    Ok(node.variables().into_iter().map(str::to_string).collect())
}
