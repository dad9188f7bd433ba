//! Frame loop driven by an external scheduler.
//!
//! The next frame is requested only after the current one has finished, so
//! frames never overlap. Stopping clears the live flag and cancels the
//! pending request; a callback the host already dispatched may still run
//! once, sees the flag and returns without touching the core.
//!
//! Queued callbacks only hold a weak reference to the loop state, so a
//! scheduler that never frees a cancelled callback cannot keep a dropped
//! loop (core, surface, buffer) alive.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::core::VortexResult;
use crate::surface::DrawSurface;

use super::{FrameOutcome, VortexCore};

pub type FrameCallback = Box<dyn FnOnce()>;

/// Host id of a requested frame (the `requestAnimationFrame` return value).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Single-callback-per-request frame scheduler.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> VortexResult<FrameHandle>;
    fn cancel_frame(&self, handle: FrameHandle);
}

struct LoopState<S: DrawSurface, F: FrameScheduler> {
    core: RefCell<VortexCore<S>>,
    scheduler: F,
    live: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
}

pub struct AnimationLoop<S: DrawSurface + 'static, F: FrameScheduler + 'static> {
    state: Rc<LoopState<S, F>>,
}

impl<S: DrawSurface + 'static, F: FrameScheduler + 'static> AnimationLoop<S, F> {
    pub fn new(core: VortexCore<S>, scheduler: F) -> Self {
        Self {
            state: Rc::new(LoopState {
                core: RefCell::new(core),
                scheduler,
                live: Cell::new(false),
                pending: Cell::new(None),
            }),
        }
    }

    /// Request the first frame. No-op if already running or destroyed.
    pub fn start(&self) -> VortexResult<()> {
        if self.state.live.get() || self.state.core.borrow().is_disposed() {
            return Ok(());
        }
        self.state.live.set(true);
        if let Err(err) = schedule(&self.state) {
            self.state.live.set(false);
            return Err(err);
        }
        Ok(())
    }

    /// Stop requesting frames and cancel the pending one.
    pub fn stop(&self) {
        self.state.live.set(false);
        if let Some(handle) = self.state.pending.take() {
            self.state.scheduler.cancel_frame(handle);
        }
    }

    /// Stop and release the particle buffer. Idempotent.
    pub fn destroy(&self) {
        self.stop();
        self.state.core.borrow_mut().destroy();
    }

    pub fn is_running(&self) -> bool {
        self.state.live.get()
    }

    pub fn scheduler(&self) -> &F {
        &self.state.scheduler
    }

    pub fn with_core<R>(&self, f: impl FnOnce(&mut VortexCore<S>) -> R) -> R {
        let mut core = self.state.core.borrow_mut();
        f(&mut *core)
    }

    /// Non-owning handle for host listeners (resize and the like).
    pub fn handle(&self) -> LoopHandle<S, F> {
        LoopHandle {
            state: Rc::downgrade(&self.state),
        }
    }
}

impl<S: DrawSurface + 'static, F: FrameScheduler + 'static> Drop for AnimationLoop<S, F> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Weak reference to a running loop; dead once the loop is dropped.
pub struct LoopHandle<S: DrawSurface, F: FrameScheduler> {
    state: Weak<LoopState<S, F>>,
}

impl<S: DrawSurface, F: FrameScheduler> LoopHandle<S, F> {
    pub fn with_core<R>(&self, f: impl FnOnce(&mut VortexCore<S>) -> R) -> Option<R> {
        let state = self.state.upgrade()?;
        let mut core = state.core.try_borrow_mut().ok()?;
        Some(f(&mut *core))
    }
}

fn schedule<S: DrawSurface + 'static, F: FrameScheduler + 'static>(
    state: &Rc<LoopState<S, F>>,
) -> VortexResult<()> {
    let next = Rc::downgrade(state);
    let handle = state.scheduler.request_frame(Box::new(move || {
        if let Some(state) = next.upgrade() {
            on_frame(&state);
        }
    }))?;
    state.pending.set(Some(handle));
    Ok(())
}

fn on_frame<S: DrawSurface + 'static, F: FrameScheduler + 'static>(state: &Rc<LoopState<S, F>>) {
    state.pending.set(None);
    if !state.live.get() {
        return;
    }

    let outcome = state.core.borrow_mut().frame();
    if outcome == FrameOutcome::Disposed {
        state.live.set(false);
        return;
    }

    if let Err(err) = schedule(state) {
        console_warn!("vortex: stopping animation: {}", err);
        state.live.set(false);
    }
}

/// Scheduler driven by hand: callbacks queue up until [`fire_next`] runs
/// them. Used for headless runs and tests.
///
/// [`fire_next`]: ManualScheduler::fire_next
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<(FrameHandle, FrameCallback)>>,
    next_id: Cell<i32>,
    late_cancel: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancellation arrives too late: the queued callback still fires once.
    pub fn with_late_cancel() -> Self {
        Self {
            late_cancel: true,
            ..Self::default()
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the oldest queued callback. Returns `false` if none was queued.
    pub fn fire_next(&self) -> bool {
        let entry = self.queue.borrow_mut().pop_front();
        match entry {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Fire up to `frames` callbacks; returns how many ran.
    pub fn run(&self, frames: usize) -> usize {
        (0..frames).take_while(|_| self.fire_next()).count()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> VortexResult<FrameHandle> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = FrameHandle(id);
        self.queue.borrow_mut().push_back((handle, callback));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if self.late_cancel {
            return;
        }
        self.queue.borrow_mut().retain(|(h, _)| *h != handle);
    }
}
