//! WASM bindings for seseg-core.
//!
//! Exposes JSON-in, string-out composition as `#[wasm_bindgen]` functions
//! callable from JavaScript/TypeScript. Values cross the boundary as JSON
//! text, so callers `JSON.stringify` their class values first.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p seseg-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/seseg-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/seseg_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Compose a JSON document (one class value) into a class string.
///
/// Throws a JS error if the input is not valid JSON.
#[wasm_bindgen]
pub fn compose(json: &str) -> std::result::Result<String, JsValue> {
    seseg_core::compose_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compose a JSON array of arguments into a class string, as if each element
/// were passed as a separate argument.
///
/// Throws a JS error if the input is not valid JSON or is not an array.
#[wasm_bindgen(js_name = composeArgs)]
pub fn compose_args(json: &str) -> std::result::Result<String, JsValue> {
    seseg_core::compose_json_args(json).map_err(|e| JsValue::from_str(&e.to_string()))
}
