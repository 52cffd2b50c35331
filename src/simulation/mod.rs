//! Simulation - the two-block collision demo
//!
//! SimulationCore owns every piece of mutable state (bodies, counter, clock,
//! run status) and only orchestrates; the physics lives in systems/.
//!
//! - commands/ - play, reset, set mass, set initial velocity
//! - step/     - per-frame tick: clock -> integrator -> resolver
//! - render/   - read-only snapshot for the canvas side
//! - perf/     - optional per-tick timing
//! - facade    - wasm-bindgen surface for JavaScript
//!
//! Commands take `&mut self`, so they always land between ticks.

use wasm_bindgen::prelude::*;

use crate::body::{Body, BodyId, BodyPair};
use crate::clock::SimulationClock;
use crate::config::SimConfig;
use crate::error::Result;
use crate::predict::{predict_collision_total, DEFAULT_EVENT_LIMIT};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/report.rs"]
mod report;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;
pub use render_extract::{BodyView, RenderSnapshot};
pub use report::TickReport;

use perf_timer::PerfTimer;

/// Run status
///
/// `Idle --play--> Running --reset--> Idle`; a non-finite step moves
/// `Running --fault--> Faulted`, and only `reset` leaves `Faulted`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimStatus {
    Idle = 0,
    Running = 1,
    Faulted = 2,
}

impl SimStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SimStatus::Idle => "idle",
            SimStatus::Running => "running",
            SimStatus::Faulted => "faulted",
        }
    }
}

/// The simulation state
pub struct SimulationCore {
    config: SimConfig,
    bodies: BodyPair,
    clock: SimulationClock,
    status: SimStatus,
    collision_count: u64,
    /// Velocities from the input side, applied on `play`
    initial_velocity: [f64; 2],

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationCore {
    /// Create a simulation with the default demo configuration
    pub fn new() -> Self {
        init::create_simulation_core(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(init::create_simulation_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Ok(init::create_simulation_core(SimConfig::from_json(json)?))
    }

    /// Swap in a new configuration. Masses, placement and user velocities all
    /// come from the new config and the simulation returns to `Idle`.
    pub fn load_config_json(&mut self, json: &str) -> Result<()> {
        settings::load_config(self, SimConfig::from_json(json)?);
        Ok(())
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &BodyPair {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> &Body {
        self.bodies.get(id)
    }

    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SimStatus::Running
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.clock.accumulator_ms()
    }

    /// Velocity `play` will give this body
    pub fn initial_velocity(&self, id: BodyId) -> f64 {
        self.initial_velocity[id.index()]
    }

    // === COMMANDS ===

    /// Start the run, seeding velocities from the input side
    pub fn play(&mut self) -> Result<()> {
        commands::play(self)
    }

    /// Stop and restore placement; masses are kept
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    /// Clamp `raw` to the configured mass range and apply it.
    /// Returns the mass actually applied.
    pub fn set_mass(&mut self, id: BodyId, raw: f64) -> f64 {
        commands::set_mass(self, id, raw)
    }

    pub fn set_initial_velocity(&mut self, id: BodyId, raw: f64) -> f64 {
        commands::set_initial_velocity(self, id, raw)
    }

    // === STEPPING ===

    /// Advance by `elapsed_ms` of wall-clock time
    pub fn tick(&mut self, elapsed_ms: f64) -> Result<TickReport> {
        step::tick(self, elapsed_ms)
    }

    /// Advance to an animation-frame timestamp. The first frame after `play`
    /// only records the timestamp.
    pub fn tick_at(&mut self, timestamp_ms: f64) -> Result<TickReport> {
        step::tick_at(self, timestamp_ms)
    }

    // === READ-ONLY VIEWS ===

    pub fn snapshot(&self) -> RenderSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }

    /// Collisions the next `play` would produce from the current placement
    pub fn predicted_collision_total(&self) -> Result<u64> {
        let mut bodies = self.bodies;
        if self.status == SimStatus::Idle {
            bodies.left.velocity = self.initial_velocity[0].floor();
            bodies.right.velocity = self.initial_velocity[1].floor();
        }
        let already = if self.status == SimStatus::Idle { 0 } else { self.collision_count };
        Ok(already + predict_collision_total(&bodies, DEFAULT_EVENT_LIMIT)?)
    }

    // === PERF ===

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
