use crate::error::{Result, SimError};
use crate::integrator::advance;

use super::{PerfTimer, SimStatus, SimulationCore, TickReport};

pub(super) fn tick(sim: &mut SimulationCore, elapsed_ms: f64) -> Result<TickReport> {
    match sim.status {
        SimStatus::Idle => return Ok(TickReport::default()),
        SimStatus::Faulted => return Err(SimError::Faulted),
        SimStatus::Running => {}
    }

    let perf_on = sim.perf_enabled;
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let mut report = TickReport {
        consumed_ms: sim.clock.accumulate(elapsed_ms),
        ..TickReport::default()
    };
    let dt = sim.clock.step_seconds();

    while sim.clock.try_consume_step() {
        let contacts = advance(&mut sim.bodies, dt);
        report.substeps += 1;
        // Velocities only change at contacts, so that is where NaN/inf can appear.
        if contacts.any() {
            sim.collision_count += contacts.count();
            report.record(contacts);
            if let Err(err) = sim.bodies.check_finite() {
                return Err(fault(sim, err));
            }
        }
    }
    // Positions drift every step; one check per tick is enough to catch overflow.
    if let Err(err) = sim.bodies.check_finite() {
        return Err(fault(sim, err));
    }

    if let Some(start) = tick_start {
        sim.perf_stats.record_tick(&report, start.elapsed_ms(), sim.clock.accumulator_ms());
    }

    Ok(report)
}

pub(super) fn tick_at(sim: &mut SimulationCore, timestamp_ms: f64) -> Result<TickReport> {
    match sim.status {
        SimStatus::Idle => return Ok(TickReport::default()),
        SimStatus::Faulted => return Err(SimError::Faulted),
        SimStatus::Running => {}
    }
    match sim.clock.frame_delta(timestamp_ms) {
        Some(delta) => tick(sim, delta),
        None => Ok(TickReport::default()),
    }
}

fn fault(sim: &mut SimulationCore, err: SimError) -> SimError {
    sim.status = SimStatus::Faulted;
    console_error!(
        "💥 simulation fault after {} collisions: {}",
        sim.collision_count,
        err
    );
    err
}
