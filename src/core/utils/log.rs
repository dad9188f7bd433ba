//! Console logging.
//!
//! On wasm32 messages go to the browser console through `web_sys::console`.
//! Host builds (native tests, benches) never call into JS: `console_log!`
//! is dropped and `console_warn!` falls back to stderr.

/// Log an informational message to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::log(&format!($($arg)*))
    };
}

/// Log a warning to the browser console (stderr on host).
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::log::warn(&format!($($arg)*))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    eprintln!("[vortex] {}", message);
}
