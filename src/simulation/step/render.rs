use crate::surface::{DrawSurface, Rect};

use super::VortexCore;

/// Clear, then fill the background. Runs once per frame before any stroke.
pub(super) fn begin_frame<S: DrawSurface>(core: &mut VortexCore<S>) {
    let rect = Rect::covering(&core.viewport);
    core.surface.clear(rect);
    core.surface.fill_rect(rect, core.background);
}

/// Layered glow over everything drawn this frame, then present.
pub(super) fn composite<S: DrawSurface>(core: &mut VortexCore<S>) {
    core.glow.apply(&mut core.surface);
    core.glow.present(&mut core.surface);
}
