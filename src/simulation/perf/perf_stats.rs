use wasm_bindgen::prelude::*;

use super::TickReport;

/// Timing and counters for the most recent tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) substeps: u32,
    pub(super) collisions: u32,
    pub(super) accumulator_ms: f64,
    /// Nanoseconds per sub-step, the number that decides how small the step can go
    pub(super) ns_per_substep: f64,
    pub(super) ticks: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(super) fn record_tick(&mut self, report: &TickReport, tick_ms: f64, accumulator_ms: f64) {
        self.tick_ms = tick_ms;
        self.substeps = report.substeps;
        self.collisions = report.wall_hits + report.pair_hits;
        self.accumulator_ms = accumulator_ms;
        self.ns_per_substep = if report.substeps > 0 {
            tick_ms * 1.0e6 / report.substeps as f64
        } else {
            0.0
        };
        self.ticks += 1;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn accumulator_ms(&self) -> f64 { self.accumulator_ms }
    #[wasm_bindgen(getter)]
    pub fn ns_per_substep(&self) -> f64 { self.ns_per_substep }
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u64 { self.ticks }
}
