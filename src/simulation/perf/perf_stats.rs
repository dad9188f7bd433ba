use wasm_bindgen::prelude::*;

/// Per-frame timings and counters, filled only while perf is enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) background_ms: f64,
    pub(super) simulate_ms: f64,
    pub(super) glow_ms: f64,
    pub(super) particles_advected: u32,
    pub(super) respawned_expired: u32,
    pub(super) respawned_out_of_bounds: u32,
    pub(super) particle_count: u32,
    pub(super) tick: f64,
    pub(super) buffer_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn set_tick(&mut self, tick: u64) {
        self.tick = tick as f64;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn background_ms(&self) -> f64 { self.background_ms }
    /// Advection and trail strokes (interleaved per particle).
    #[wasm_bindgen(getter)]
    pub fn simulate_ms(&self) -> f64 { self.simulate_ms }
    #[wasm_bindgen(getter)]
    pub fn glow_ms(&self) -> f64 { self.glow_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_advected(&self) -> u32 { self.particles_advected }
    #[wasm_bindgen(getter)]
    pub fn respawned_expired(&self) -> u32 { self.respawned_expired }
    #[wasm_bindgen(getter)]
    pub fn respawned_out_of_bounds(&self) -> u32 { self.respawned_out_of_bounds }
    #[wasm_bindgen(getter)]
    pub fn respawned(&self) -> u32 { self.respawned_expired + self.respawned_out_of_bounds }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    /// Frame tick; exact up to 2^53 frames.
    pub fn tick(&self) -> f64 { self.tick }
    #[wasm_bindgen(getter)]
    pub fn buffer_bytes(&self) -> u32 { self.buffer_bytes }
}
