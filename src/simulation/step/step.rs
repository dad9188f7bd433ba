use crate::surface::DrawSurface;
use crate::systems::FrameCounters;

use super::perf_timer::start_if;
use super::{render, FrameOutcome, VortexCore};

pub(super) fn frame<S: DrawSurface>(core: &mut VortexCore<S>) -> FrameOutcome {
    // A callback that was already queued when the instance was destroyed
    // lands here; it must not touch the pool or the surface.
    if core.disposed {
        return FrameOutcome::Disposed;
    }
    // Not laid out yet: no tick, no draw.
    if core.viewport.is_empty() {
        return FrameOutcome::Skipped;
    }

    let perf_on = core.perf_enabled;
    let frame_start = start_if(perf_on);
    let mut lap = start_if(perf_on);

    render::begin_frame(core);
    let background_ms = lap.as_mut().map(|t| t.lap_ms()).unwrap_or(0.0);

    let counters = advance_and_draw(core);
    let simulate_ms = lap.as_mut().map(|t| t.lap_ms()).unwrap_or(0.0);

    render::composite(core);
    let glow_ms = lap.as_mut().map(|t| t.lap_ms()).unwrap_or(0.0);

    if let Some(start) = frame_start {
        let stats = &mut core.perf_stats;
        stats.reset();
        stats.background_ms = background_ms;
        stats.simulate_ms = simulate_ms;
        stats.glow_ms = glow_ms;
        stats.particles_advected = counters.advected;
        stats.respawned_expired = counters.expired;
        stats.respawned_out_of_bounds = counters.out_of_bounds;
        stats.particle_count = core.pool.capacity() as u32;
        stats.set_tick(core.simulator.tick());
        stats.buffer_bytes = core.pool.byte_len() as u32;
        stats.frame_ms = start.elapsed_ms();
    }

    FrameOutcome::Rendered
}

/// Tick, then advect every particle, stroking each segment as it is produced.
fn advance_and_draw<S: DrawSurface>(core: &mut VortexCore<S>) -> FrameCounters {
    let VortexCore {
        surface,
        pool,
        simulator,
        trail,
        rng,
        params,
        viewport,
        ..
    } = core;

    simulator.advance(pool, rng, params, viewport, |segment| {
        trail.draw(surface, segment)
    })
}
