use wasm_bindgen::prelude::*;

use crate::body::BodyId;
use crate::error::SimError;

use super::perf_stats::PerfStats;
use super::{SimStatus, SimulationCore, TickReport};

fn to_js(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript handle to the simulation.
///
/// The page's `requestAnimationFrame` loop calls `frame(ts)` (or `tick(ms)`)
/// while `running` is true, then reads the getters to draw.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with the default demo setup (1 kg vs 1,000,000 kg)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_config_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Replace the configuration; the simulation returns to idle
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === COMMANDS ===

    pub fn play(&mut self) -> Result<(), JsValue> {
        self.core.play().map_err(to_js)
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Apply a mass from the input field; returns the clamped value
    pub fn set_mass(&mut self, body: BodyId, raw: f64) -> f64 {
        self.core.set_mass(body, raw)
    }

    pub fn set_initial_velocity(&mut self, body: BodyId, raw: f64) -> f64 {
        self.core.set_initial_velocity(body, raw)
    }

    // === STEPPING ===

    /// Advance by `elapsed_ms` of wall-clock time
    pub fn tick(&mut self, elapsed_ms: f64) -> Result<TickReport, JsValue> {
        self.core.tick(elapsed_ms).map_err(to_js)
    }

    /// Advance to a `requestAnimationFrame` timestamp
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<TickReport, JsValue> {
        self.core.tick_at(timestamp_ms).map_err(to_js)
    }

    // === STATE (read-only) ===

    #[wasm_bindgen(getter)]
    pub fn collision_count(&self) -> u64 { self.core.collision_count() }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> SimStatus { self.core.status() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn accumulator_ms(&self) -> f64 { self.core.accumulator_ms() }

    pub fn mass(&self, body: BodyId) -> f64 { self.core.body(body).mass() }

    pub fn position(&self, body: BodyId) -> f64 { self.core.body(body).position }

    pub fn size(&self, body: BodyId) -> f64 { self.core.body(body).size() }

    pub fn velocity(&self, body: BodyId) -> f64 { self.core.body(body).velocity }

    pub fn initial_velocity(&self, body: BodyId) -> f64 { self.core.initial_velocity(body) }

    /// Both bodies, counter and status as JSON
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    /// Total clacks the current setup will produce
    pub fn predicted_collision_total(&self) -> Result<u64, JsValue> {
        self.core.predicted_collision_total().map_err(to_js)
    }

    // === PERF ===

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
