//! Clack Engine - two-block elastic collision physics in WASM
//!
//! A light block sits between a wall and a heavy block; every clack (wall or
//! block contact) is elastic. The engine sub-steps with a tiny fixed step so
//! contact detection is effectively continuous, and counts collisions.
//!
//! Architecture:
//! - utils/       - Console logging macros
//! - domain/      - Configuration and errors
//! - systems/     - Body, integrator, collision resolver, clock, predictor
//! - simulation/  - SimulationCore orchestration + JS facade

// Macros first so every module below can log
#[macro_use]
pub mod utils;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths
pub use domain::config;
pub use domain::error;
pub use systems::body;
pub use systems::clock;
pub use systems::collision;
pub use systems::integrator;
pub use systems::predict;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Thread pool for parallel prediction sweeps (call `initThreadPool` from JS first)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🧱 Clack engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Predicted collision totals for a light block struck by blocks `ratios`
/// times heavier. Totals come back as f64 (exact below 2^53).
#[wasm_bindgen(js_name = sweepCollisionTotals)]
pub fn sweep_collision_totals(ratios: Vec<f64>) -> Result<Vec<f64>, JsValue> {
    predict::sweep_mass_ratios(&ratios, predict::DEFAULT_EVENT_LIMIT)
        .into_iter()
        .map(|total| {
            total
                .map(|n| n as f64)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
        .collect()
}

/// Mass ratios whose collision totals spell the first `digits` digits of pi
#[wasm_bindgen(js_name = piDigitRatios)]
pub fn pi_digit_ratios(digits: u32) -> Vec<f64> {
    predict::pi_digit_ratios(digits)
}

// Re-export main types
pub use body::{Body, BodyId, BodyPair, SizeRule};
pub use collision::CollisionEvent;
pub use config::SimConfig;
pub use error::SimError;
pub use simulation::{Simulation, SimulationCore, SimStatus, TickReport};
