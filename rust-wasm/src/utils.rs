//! Utility functions for WASM bindings
//!
//! Helper functions for conversion between Rust and JavaScript types

use modular_domains::ModularError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser console
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Log a message to the browser console
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Macro for logging from Rust to browser console
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::utils::log(&format_args!($($t)*).to_string())
    };
}

/// Turn a library error into a JavaScript string value
pub fn to_js_error(error: ModularError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Serialize a value, labelling failures with `what`
pub fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize {}: {}", what, e)))
}
