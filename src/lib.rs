//! Vortex Engine - flow-field particle background in WASM
//!
//! Particles drift along a time-varying Perlin noise field, leave faded
//! trails and get a two-pass additive glow.
//!
//! Architecture:
//! - core/        - macros, logging, RNG, clock, errors
//! - domain/      - options, particle record layout, colors, viewport
//! - systems/     - noise field, pool, flow, trail, glow
//! - surface/     - drawing surface trait + recording surface
//! - simulation/  - orchestration, frame loop, wasm facade
//! - web/         - canvas surface and requestAnimationFrame (wasm32 only)

// Macros must come first so every module below can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod surface;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Vortex engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{VortexError, VortexResult};
pub use domain::options::VortexOptions;
pub use simulation::{
    AnimationLoop, FrameOutcome, FrameScheduler, ManualScheduler, PerfStats, VortexCore,
};
pub use surface::{DrawSurface, RecordingSurface};

#[cfg(target_arch = "wasm32")]
pub use simulation::Vortex;

/// Start an animation on `canvas`. Same as `new Vortex(canvas, options)`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn create(
    canvas: web_sys::HtmlCanvasElement,
    options_json: Option<String>,
) -> Result<Vortex, JsValue> {
    Vortex::new(canvas, options_json)
}

/// Stop the animation and release its buffer. Idempotent.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn destroy(handle: &mut Vortex) {
    handle.destroy();
}
