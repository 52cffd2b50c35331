use crate::body::BodyId;
use crate::config::check_placement;
use crate::error::{Result, SimError};

use super::{SimStatus, SimulationCore};

pub(super) fn play(sim: &mut SimulationCore) -> Result<()> {
    match sim.status {
        SimStatus::Running => return Ok(()),
        SimStatus::Faulted => return Err(SimError::Faulted),
        SimStatus::Idle => {}
    }

    let left_mass = sim.bodies.left.mass();
    let right_mass = sim.bodies.right.mass();
    let total = left_mass + right_mass;
    if !(total.is_finite() && total > 0.0) {
        return Err(SimError::DegenerateMass {
            left: left_mass,
            right: right_mass,
        });
    }

    // A mass edit can grow the left block into the right one
    let left = &sim.bodies.left;
    check_placement(left.position, left.size(), sim.bodies.right.position)?;

    // Velocity inputs are whole numbers; fractions are floored.
    sim.bodies.left.velocity = sim.initial_velocity[BodyId::Left.index()].floor();
    sim.bodies.right.velocity = sim.initial_velocity[BodyId::Right.index()].floor();
    sim.clock.clear_timestamp();
    sim.status = SimStatus::Running;

    console_log!(
        "▶ play: m1={} m2={} v1={} v2={}",
        left_mass,
        right_mass,
        sim.bodies.left.velocity,
        sim.bodies.right.velocity
    );
    Ok(())
}

pub(super) fn reset(sim: &mut SimulationCore) {
    let left = sim.config.left;
    let right = sim.config.right;

    sim.bodies.left.position = left.position;
    sim.bodies.left.velocity = left.velocity;
    sim.bodies.right.position = right.position;
    sim.bodies.right.velocity = right.velocity;

    sim.collision_count = 0;
    sim.clock.reset();
    sim.perf_stats.reset();
    sim.status = SimStatus::Idle;
}

pub(super) fn set_mass(sim: &mut SimulationCore, id: BodyId, raw: f64) -> f64 {
    let mass = sim.config.mass_range().clamp(raw);
    if mass != raw {
        console_warn!("{} mass {} clamped to {}", id, raw, mass);
    }
    sim.bodies.get_mut(id).set_mass(mass);
    mass
}

pub(super) fn set_initial_velocity(sim: &mut SimulationCore, id: BodyId, raw: f64) -> f64 {
    let velocity = if raw.is_finite() { raw } else { 0.0 };
    sim.initial_velocity[id.index()] = velocity;
    velocity
}
