//! Millisecond stopwatch for tick timing.
//!
//! wasm32 reads `Date.now()` through js-sys; native measures from a
//! process-wide `Instant` so both sides report plain f64 milliseconds.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}
