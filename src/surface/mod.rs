//! Drawing surface boundary.
//!
//! The engine only ever talks to a [`DrawSurface`]: the browser canvas in
//! `web::canvas`, or [`RecordingSurface`] for headless runs and tests.
//! Surface calls cannot fail from the engine's point of view; an
//! implementation that hits a host error logs it and carries on.

mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use crate::domain::color::{Hsla, Rgba};
use crate::domain::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The whole drawable area.
    pub fn covering(viewport: &Viewport) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: viewport.width,
            height: viewport.height,
        }
    }
}

/// Canvas `globalCompositeOperation` values the pipeline uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    /// Additive blending.
    Lighter,
}

impl CompositeMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

/// Blur + brightness filter applied to subsequent draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Filter {
    pub blur_px: f32,
    pub brightness_pct: f32,
}

impl Filter {
    pub fn to_css(&self) -> String {
        format!("blur({}px) brightness({}%)", self.blur_px, self.brightness_pct)
    }
}

/// Where `draw_self_onto` copies the current surface contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawTarget {
    /// Back onto the working surface (glow accumulation).
    Itself,
    /// Onto the visible presentation target.
    Visible,
}

pub trait DrawSurface {
    /// Current pixel size of the surface.
    fn dimensions(&self) -> (u32, u32);

    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Round-capped line segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Hsla);

    /// Push compositing state (mode + filter).
    fn save(&mut self);

    /// Pop compositing state pushed by [`DrawSurface::save`].
    fn restore(&mut self);

    fn set_composite_mode(&mut self, mode: CompositeMode);

    /// `None` clears the filter.
    fn set_filter(&mut self, filter: Option<Filter>);

    fn draw_self_onto(&mut self, target: DrawTarget);
}
