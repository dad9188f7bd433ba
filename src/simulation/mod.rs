//! Vortex - flow-field particle animation
//!
//! `VortexCore` only orchestrates. The work lives in `systems/`:
//! - noise_field: flow direction per position and tick
//! - pool: packed particle buffer, spawn/respawn
//! - flow: per-frame advection and the Alive/Respawn transition
//! - trail, glow: drawing and compositing
//!
//! One instance owns one buffer, one RNG and one surface. Nothing here is
//! shared between instances.

use crate::core::random::Rng;
use crate::core::VortexResult;
use crate::domain::color::Rgba;
use crate::domain::options::VortexOptions;
use crate::domain::viewport::Viewport;
use crate::surface::DrawSurface;
use crate::systems::{FlowSimulator, GlowCompositor, ParticlePool, SpawnParams, TrailRenderer};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/render.rs"]
mod render;
#[path = "step/step.rs"]
mod step;
#[path = "schedule/frame_loop.rs"]
mod frame_loop;
#[cfg(target_arch = "wasm32")]
mod facade;

#[cfg(target_arch = "wasm32")]
pub use facade::Vortex;
pub use frame_loop::{
    AnimationLoop, FrameCallback, FrameHandle, FrameScheduler, LoopHandle, ManualScheduler,
};
pub use perf_stats::PerfStats;

/// What a call to [`VortexCore::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Simulated, drew and composited one frame.
    Rendered,
    /// Surface has no area yet; nothing advanced.
    Skipped,
    /// Instance was destroyed; nothing touched.
    Disposed,
}

/// The animation instance
pub struct VortexCore<S: DrawSurface> {
    surface: S,
    options: VortexOptions,
    background: Rgba,
    params: SpawnParams,
    viewport: Viewport,

    pool: ParticlePool,
    simulator: FlowSimulator,
    trail: TrailRenderer,
    glow: GlowCompositor,
    rng: Rng,
    seed: u32,
    disposed: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl<S: DrawSurface> VortexCore<S> {
    /// Validate options, allocate the pool and spawn every particle.
    ///
    /// Fails without keeping any state if the options are invalid.
    pub fn create(surface: S, options: VortexOptions) -> VortexResult<Self> {
        init::create_vortex_core(surface, options)
    }

    /// Run one frame: tick, advect/respawn, draw, glow, present.
    pub fn frame(&mut self) -> FrameOutcome {
        step::frame(self)
    }

    /// Stop rendering and release the particle buffer. Safe to call twice.
    pub fn destroy(&mut self) {
        settings::destroy(self);
    }

    /// New surface size. Particles keep their positions; the new bounds
    /// apply from the next frame and the next respawn.
    pub fn resize(&mut self, width: u32, height: u32) {
        settings::resize(self, width, height);
    }

    /// Respawn every slot and reset the tick to zero.
    pub fn respawn_all(&mut self) {
        init::spawn_all(self);
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf is disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn tick(&self) -> u64 {
        self.simulator.tick()
    }

    pub fn particle_count(&self) -> usize {
        self.pool.capacity()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &VortexOptions {
        &self.options
    }

    /// Active options as JSON, seed included.
    pub fn options_json(&self) -> String {
        self.options.clone().with_seed(self.seed).to_json()
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Pointer to the packed particle buffer (for JS debug overlays)
    pub fn particles_ptr(&self) -> *const f32 {
        self.pool.as_ptr()
    }

    /// Number of `f32`s in the particle buffer
    pub fn particles_len(&self) -> usize {
        self.pool.as_slice().len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
