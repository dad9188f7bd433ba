//! Canvas 2D implementation of [`DrawSurface`].
//!
//! Frames are drawn on an offscreen working canvas; glow passes draw it back
//! onto itself and `present` copies it to the visible canvas. Compositing
//! state (save/restore, mode, filter) is mirrored on both contexts.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::core::{VortexError, VortexResult};
use crate::domain::color::{Hsla, Rgba};
use crate::surface::{CompositeMode, DrawSurface, DrawTarget, Filter, Point, Rect};

use super::js_error;

pub struct CanvasSurface {
    visible: HtmlCanvasElement,
    visible_ctx: CanvasRenderingContext2d,
    working: HtmlCanvasElement,
    working_ctx: CanvasRenderingContext2d,
}

fn context_2d(canvas: &HtmlCanvasElement) -> VortexResult<CanvasRenderingContext2d> {
    let unavailable = |e: JsValue| VortexError::SurfaceUnavailable(js_error("getContext", &e));
    canvas
        .get_context("2d")
        .map_err(unavailable)?
        .ok_or_else(|| VortexError::SurfaceUnavailable("2d context not supported".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| VortexError::SurfaceUnavailable("2d context has the wrong type".into()))
}

/// Additive blending and the `filter` property must both exist.
fn probe(ctx: &CanvasRenderingContext2d) -> VortexResult<()> {
    ctx.set_global_composite_operation(CompositeMode::Lighter.as_css())
        .map_err(|e| VortexError::SurfaceUnavailable(js_error("lighter blending", &e)))?;
    ctx.set_global_composite_operation(CompositeMode::SourceOver.as_css())
        .map_err(|e| VortexError::SurfaceUnavailable(js_error("source-over blending", &e)))?;

    let has_filter = js_sys::Reflect::has(ctx, &JsValue::from_str("filter"))
        .map_err(|e| VortexError::SurfaceUnavailable(js_error("filter probe", &e)))?;
    if !has_filter {
        return Err(VortexError::SurfaceUnavailable(
            "canvas filters not supported".into(),
        ));
    }
    Ok(())
}

impl CanvasSurface {
    /// Wrap `visible`, create the working canvas and size both.
    pub fn new(
        document: &Document,
        visible: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> VortexResult<Self> {
        let working = document
            .create_element("canvas")
            .map_err(|e| VortexError::SurfaceUnavailable(js_error("createElement", &e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| VortexError::SurfaceUnavailable("createElement did not return a canvas".into()))?;

        let visible_ctx = context_2d(&visible)?;
        let working_ctx = context_2d(&working)?;
        probe(&visible_ctx)?;
        probe(&working_ctx)?;

        let mut surface = Self {
            visible,
            visible_ctx,
            working,
            working_ctx,
        };
        surface.set_size(width, height);
        Ok(surface)
    }

    /// Resize both canvases. Canvas contents are cleared by the browser.
    pub fn set_size(&mut self, width: u32, height: u32) {
        for canvas in [&self.visible, &self.working] {
            canvas.set_width(width);
            canvas.set_height(height);
        }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.visible
    }

    fn both(&self) -> [&CanvasRenderingContext2d; 2] {
        [&self.working_ctx, &self.visible_ctx]
    }
}

impl DrawSurface for CanvasSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.visible.width(), self.visible.height())
    }

    fn clear(&mut self, rect: Rect) {
        self.working_ctx.clear_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.working_ctx.set_fill_style_str(&color.to_css());
        self.working_ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Hsla) {
        let ctx = &self.working_ctx;
        ctx.save();
        ctx.set_line_cap("round");
        ctx.set_line_width(width as f64);
        ctx.set_stroke_style_str(&color.to_css());
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
        ctx.close_path();
        ctx.restore();
    }

    fn save(&mut self) {
        for ctx in self.both() {
            ctx.save();
        }
    }

    fn restore(&mut self) {
        for ctx in self.both() {
            ctx.restore();
        }
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        for ctx in self.both() {
            if let Err(e) = ctx.set_global_composite_operation(mode.as_css()) {
                console_warn!("{}", js_error("globalCompositeOperation", &e));
            }
        }
    }

    fn set_filter(&mut self, filter: Option<Filter>) {
        let css = filter.map(|f| f.to_css()).unwrap_or_else(|| "none".to_string());
        for ctx in self.both() {
            ctx.set_filter(&css);
        }
    }

    fn draw_self_onto(&mut self, target: DrawTarget) {
        let (ctx, label) = match target {
            DrawTarget::Itself => (&self.working_ctx, "glow pass"),
            DrawTarget::Visible => {
                // Visible canvas only ever shows the latest frame.
                let (w, h) = (self.visible.width() as f64, self.visible.height() as f64);
                self.visible_ctx.clear_rect(0.0, 0.0, w, h);
                (&self.visible_ctx, "present")
            }
        };
        if let Err(e) = ctx.draw_image_with_html_canvas_element(&self.working, 0.0, 0.0) {
            console_warn!("{}", js_error(label, &e));
        }
    }
}
