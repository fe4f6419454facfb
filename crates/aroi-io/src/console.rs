//! Developer-console diagnostics.
//!
//! Failures surfaced to the user collapse into one generic message;
//! the structured cause goes here instead, so it is visible in the
//! browser devtools without leaking into the UI.

use wasm_bindgen::JsValue;

/// Write an error trace to the browser console.
pub fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
