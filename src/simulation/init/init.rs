use crate::core::clock::seed_from_clock;
use crate::core::random::Rng;
use crate::core::VortexResult;
use crate::domain::color::Rgba;
use crate::domain::options::VortexOptions;
use crate::domain::viewport::Viewport;
use crate::surface::DrawSurface;
use crate::systems::{
    FlowSimulator, GlowCompositor, NoiseField, ParticlePool, SpawnParams, TrailRenderer,
};

use super::perf_stats::PerfStats;
use super::VortexCore;

pub(super) fn create_vortex_core<S: DrawSurface>(
    surface: S,
    options: VortexOptions,
) -> VortexResult<VortexCore<S>> {
    let capacity = options.capacity()?;
    let background = Rgba::parse_hex(&options.background_color)?;
    let pool = ParticlePool::new(capacity)?;

    let seed = options.seed.unwrap_or_else(seed_from_clock);
    let (width, height) = surface.dimensions();

    let mut core = VortexCore {
        surface,
        params: SpawnParams::from_options(&options),
        options,
        background,
        viewport: Viewport::new(width, height),
        pool,
        simulator: FlowSimulator::new(NoiseField::new(seed)),
        trail: TrailRenderer::default(),
        glow: GlowCompositor::default(),
        // Decorrelate spawn draws from the noise permutation.
        rng: Rng::new(seed ^ 0x5EED_F10E),
        seed,
        disposed: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    spawn_all(&mut core);

    console_log!(
        "vortex: {} particles, seed {}, surface {}x{}",
        capacity,
        seed,
        width,
        height
    );
    Ok(core)
}

/// Reset the tick and respawn every slot.
pub(super) fn spawn_all<S: DrawSurface>(core: &mut VortexCore<S>) {
    if core.disposed {
        return;
    }
    core.simulator.reset_tick();
    core.pool.spawn_all(&mut core.rng, &core.params, &core.viewport);
}
