use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::{VortexError, VortexResult};
use crate::simulation::{FrameCallback, FrameHandle, FrameScheduler};

use super::js_error;

type FrameClosure = Closure<dyn FnMut()>;

/// `requestAnimationFrame` / `cancelAnimationFrame` on a window.
///
/// The scheduler owns the closure it hands to the browser and drops it on
/// cancel. The closure that is running right now is parked in `retired`
/// while it requests the next frame and freed on the request after that.
pub struct BrowserScheduler {
    window: Window,
    current: RefCell<Option<(FrameHandle, FrameClosure)>>,
    retired: RefCell<Option<FrameClosure>>,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            current: RefCell::new(None),
            retired: RefCell::new(None),
        }
    }
}

impl FrameScheduler for BrowserScheduler {
    fn request_frame(&self, callback: FrameCallback) -> VortexResult<FrameHandle> {
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);

        let handle = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| VortexError::Scheduler(js_error("requestAnimationFrame", &e)))?;

        let previous = self.current.replace(Some((handle, closure)));
        // Frees the closure from two requests ago; the running one only moves.
        let _ = self.retired.replace(previous.map(|(_, closure)| closure));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            console_warn!("{}", js_error("cancelAnimationFrame", &e));
        }
        let mut current = self.current.borrow_mut();
        if matches!(current.as_ref(), Some((pending, _)) if *pending == handle) {
            *current = None;
        }
    }
}
