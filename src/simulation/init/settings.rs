use crate::domain::viewport::Viewport;
use crate::surface::DrawSurface;

use super::perf_stats::PerfStats;
use super::VortexCore;

pub(super) fn enable_perf_metrics<S: DrawSurface>(core: &mut VortexCore<S>, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<S: DrawSurface>(core: &VortexCore<S>) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn resize<S: DrawSurface>(core: &mut VortexCore<S>, width: u32, height: u32) {
    if core.disposed {
        return;
    }
    core.viewport = Viewport::new(width, height);
    console_log!("vortex: resized to {}x{}", width, height);
}

pub(super) fn destroy<S: DrawSurface>(core: &mut VortexCore<S>) {
    if core.disposed {
        return;
    }
    core.disposed = true;
    core.pool.release();
    core.perf_stats.reset();
    console_log!("vortex: destroyed");
}
