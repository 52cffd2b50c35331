use crate::body::{Body, BodyPair};
use crate::clock::SimulationClock;
use crate::config::SimConfig;

use super::perf_stats::PerfStats;
use super::{SimStatus, SimulationCore};

/// Build a core from an already validated config
pub(super) fn create_simulation_core(config: SimConfig) -> SimulationCore {
    SimulationCore {
        bodies: create_bodies(&config),
        clock: SimulationClock::new(config.fixed_step_ms, config.max_frame_ms),
        status: SimStatus::Idle,
        collision_count: 0,
        initial_velocity: [config.left.velocity, config.right.velocity],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}

pub(super) fn create_bodies(config: &SimConfig) -> BodyPair {
    let range = config.mass_range();
    let rule = config.size_rule();
    BodyPair::new(
        Body::new(
            range.clamp(config.left.mass),
            config.left.position,
            config.left.velocity,
            rule,
        ),
        Body::new(
            range.clamp(config.right.mass),
            config.right.position,
            config.right.velocity,
            rule,
        ),
    )
}
