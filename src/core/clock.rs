//! Wall clock, used only to derive a default seed.
//!
//! Per-frame timing never reads the clock: one frame is one logical step.

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Fold the current time into a 32-bit seed.
pub fn seed_from_clock() -> u32 {
    let ms = now_ms() as u64;
    (ms ^ (ms >> 32)) as u32
}
