use wasm_bindgen::JsValue;
use web_sys::console;

// Thin wrappers over the browser console, used by the console_log!/console_warn! macros
pub fn log(s: &str) {
    console::log_1(&JsValue::from_str(s));
}

pub fn warn(s: &str) {
    console::warn_1(&JsValue::from_str(s));
}
