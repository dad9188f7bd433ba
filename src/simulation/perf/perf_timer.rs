/// Milliseconds on a monotonic-enough clock. Only differences are used.
#[cfg(target_arch = "wasm32")]
fn clock_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Millisecond stopwatch for perf stats only; never feeds the simulation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    mark_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { mark_ms: clock_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (clock_ms() - self.mark_ms).max(0.0)
    }

    /// Elapsed time since the last mark, then move the mark to now.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = clock_ms();
        let lap = (now - self.mark_ms).max(0.0);
        self.mark_ms = now;
        lap
    }
}

/// Start a timer only when perf is on.
pub(crate) fn start_if(enabled: bool) -> Option<PerfTimer> {
    enabled.then(PerfTimer::start)
}
