use crate::config::SimConfig;

use super::init::create_simulation_core;
use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

/// Replace the whole state with one built from `config`, keeping the perf toggle
pub(super) fn load_config(sim: &mut SimulationCore, config: SimConfig) {
    let perf_enabled = sim.perf_enabled;
    *sim = create_simulation_core(config);
    sim.perf_enabled = perf_enabled;
    console_log!(
        "⚙ config loaded: step={}ms maxFrame={}ms m1={} m2={}",
        sim.config.fixed_step_ms,
        sim.config.max_frame_ms,
        sim.bodies.left.mass(),
        sim.bodies.right.mass()
    );
}
