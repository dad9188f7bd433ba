//! GlowCompositor - layered bloom over the drawn frame, then present.
//!
//! Each pass draws the surface back onto itself with additive blending
//! through a blur + brightness filter. Passes run in order, wide blur first.

use crate::domain::options::tunables::{
    GLOW_BRIGHTNESS_PCT, GLOW_TIGHT_BLUR_PX, GLOW_WIDE_BLUR_PX,
};
use crate::surface::{CompositeMode, DrawSurface, DrawTarget, Filter};

#[derive(Clone, Debug)]
pub struct GlowCompositor {
    passes: Vec<Filter>,
}

impl Default for GlowCompositor {
    fn default() -> Self {
        Self::new(vec![
            Filter {
                blur_px: GLOW_WIDE_BLUR_PX,
                brightness_pct: GLOW_BRIGHTNESS_PCT,
            },
            Filter {
                blur_px: GLOW_TIGHT_BLUR_PX,
                brightness_pct: GLOW_BRIGHTNESS_PCT,
            },
        ])
    }
}

impl GlowCompositor {
    pub fn new(passes: Vec<Filter>) -> Self {
        Self { passes }
    }

    pub fn passes(&self) -> &[Filter] {
        &self.passes
    }

    /// Run every glow pass; compositing state is restored after each.
    pub fn apply<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for filter in &self.passes {
            surface.save();
            surface.set_composite_mode(CompositeMode::Lighter);
            surface.set_filter(Some(*filter));
            surface.draw_self_onto(DrawTarget::Itself);
            surface.restore();
        }
    }

    /// Additive copy of the glow-accumulated surface onto the visible target.
    pub fn present<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.save();
        surface.set_composite_mode(CompositeMode::Lighter);
        surface.draw_self_onto(DrawTarget::Visible);
        surface.restore();
    }
}
