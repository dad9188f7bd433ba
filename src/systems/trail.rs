//! TrailRenderer - one faded, round-capped stroke per particle per frame.

use crate::domain::color::Hsla;
use crate::domain::options::tunables::{TRAIL_LIGHTNESS_PCT, TRAIL_SATURATION_PCT};
use crate::surface::{DrawSurface, Point};

use super::flow::TrailSegment;

/// Triangular envelope over `[0, m]`: 0 at `t = 0`, 1 at `t = m/2`, 0 at
/// `t = m`. Periodic in `m` past that.
#[inline]
pub fn fade_in_out(t: f32, m: f32) -> f32 {
    if m <= 0.0 {
        return 0.0;
    }
    let hm = 0.5 * m;
    ((t + hm).rem_euclid(m) - hm).abs() / hm
}

#[derive(Clone, Copy, Debug)]
pub struct TrailRenderer {
    saturation: f32,
    lightness: f32,
}

impl Default for TrailRenderer {
    fn default() -> Self {
        Self {
            saturation: TRAIL_SATURATION_PCT,
            lightness: TRAIL_LIGHTNESS_PCT,
        }
    }
}

impl TrailRenderer {
    pub fn color_for(&self, segment: &TrailSegment) -> Hsla {
        Hsla::new(
            segment.hue,
            self.saturation,
            self.lightness,
            fade_in_out(segment.life as f32, segment.ttl as f32),
        )
    }

    /// Stroke the segment. Clearing and background fill are the caller's job.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, segment: &TrailSegment) {
        surface.stroke_line(
            Point::new(segment.x1, segment.y1),
            Point::new(segment.x2, segment.y2),
            segment.radius,
            self.color_for(segment),
        );
    }
}
