use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::core::{VortexError, VortexResult};
use crate::domain::options::VortexOptions;
use crate::web::{window_size, BrowserScheduler, CanvasSurface};

use super::frame_loop::AnimationLoop;
use super::perf_stats::PerfStats;
use super::VortexCore;

type BrowserLoop = AnimationLoop<CanvasSurface, BrowserScheduler>;

fn to_js(err: VortexError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A running vortex animation bound to one canvas.
#[wasm_bindgen]
pub struct Vortex {
    animation: BrowserLoop,
    window: Window,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Vortex {
    /// Size the canvas to the window, spawn the particles and start the loop.
    ///
    /// `options_json` is an optional JSON object with camelCase option names.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, options_json: Option<String>) -> Result<Vortex, JsValue> {
        Self::create(canvas, options_json.as_deref()).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 {
        self.animation.with_core(|core| core.tick())
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.animation.with_core(|core| core.particle_count() as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u32 {
        self.animation.with_core(|core| core.seed())
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.animation.with_core(|core| core.enable_perf_metrics(enabled));
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.animation.with_core(|core| core.get_perf_stats())
    }

    /// Resize to an explicit size instead of the window's.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.animation.with_core(|core| apply_size(core, width, height));
    }

    pub fn respawn_all(&mut self) {
        self.animation.with_core(|core| core.respawn_all());
    }

    pub fn options_json(&self) -> String {
        self.animation.with_core(|core| core.options_json())
    }

    /// Pointer to the packed particle buffer (9 f32 per particle)
    pub fn particles_ptr(&self) -> u32 {
        self.animation.with_core(|core| core.particles_ptr() as u32)
    }

    pub fn particles_len(&self) -> u32 {
        self.animation.with_core(|core| core.particles_len() as u32)
    }

    /// Cancel the loop, drop the resize listener and release the buffer.
    /// Safe to call more than once.
    pub fn destroy(&mut self) {
        if let Some(listener) = self.resize_listener.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                console_warn!("{}", crate::web::js_error("removeEventListener", &e));
            }
        }
        self.animation.destroy();
    }
}

impl Vortex {
    fn create(canvas: HtmlCanvasElement, options_json: Option<&str>) -> VortexResult<Self> {
        let options = match options_json {
            Some(json) => VortexOptions::from_json(json)?,
            None => VortexOptions::default(),
        };

        let window = web_sys::window()
            .ok_or_else(|| VortexError::SurfaceUnavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| VortexError::SurfaceUnavailable("no document".into()))?;
        let (width, height) = window_size(&window);

        let surface = CanvasSurface::new(&document, canvas, width, height)?;
        let core = VortexCore::create(surface, options)?;
        let animation = AnimationLoop::new(core, BrowserScheduler::new(window.clone()));

        let handle = animation.handle();
        let resize_window = window.clone();
        let listener = Closure::wrap(Box::new(move || {
            let (w, h) = window_size(&resize_window);
            handle.with_core(|core| apply_size(core, w, h));
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .map_err(|e| {
                VortexError::SurfaceUnavailable(crate::web::js_error("addEventListener", &e))
            })?;

        let mut vortex = Self {
            animation,
            window,
            resize_listener: Some(listener),
        };
        if let Err(err) = vortex.animation.start() {
            vortex.destroy();
            return Err(err);
        }
        Ok(vortex)
    }

    pub fn with_core<R>(&self, f: impl FnOnce(&mut VortexCore<CanvasSurface>) -> R) -> R {
        self.animation.with_core(f)
    }
}

impl Drop for Vortex {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn apply_size(core: &mut VortexCore<CanvasSurface>, width: u32, height: u32) {
    if core.is_disposed() {
        return;
    }
    core.surface_mut().set_size(width, height);
    core.resize(width, height);
}
