//! Browser bindings: canvas-backed surface and `requestAnimationFrame`.

pub mod canvas;
pub mod scheduler;

pub use canvas::CanvasSurface;
pub use scheduler::BrowserScheduler;

use wasm_bindgen::JsValue;
use web_sys::Window;

/// Render a JS exception for an error message.
pub(crate) fn js_error(context: &str, value: &JsValue) -> String {
    match value.as_string() {
        Some(message) => format!("{}: {}", context, message),
        None => format!("{}: {:?}", context, value),
    }
}

/// Window inner size in CSS pixels; zero when the host doesn't report one.
pub fn window_size(window: &Window) -> (u32, u32) {
    let dim = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v as u32)
            .unwrap_or(0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}
