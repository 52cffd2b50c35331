use super::*;
use crate::collision::CollisionEvent;
use crate::error::{Quantity, SimError};

fn config_with_step(step_ms: f64) -> SimConfig {
    SimConfig {
        fixed_step_ms: step_ms,
        ..SimConfig::default()
    }
}

fn sim_with(config: SimConfig) -> SimulationCore {
    SimulationCore::with_config(config).expect("test config should be valid")
}

fn hundred_to_one() -> SimConfig {
    let mut config = config_with_step(0.01);
    config.right.mass = 100.0;
    config
}

fn run(sim: &mut SimulationCore, ticks: usize, elapsed_ms: f64) {
    for _ in 0..ticks {
        sim.tick(elapsed_ms).expect("tick should not fault");
    }
}

#[test]
fn idle_tick_does_nothing() {
    let mut sim = sim_with(config_with_step(0.5));
    let before = *sim.bodies();

    let report = sim.tick(16.0).unwrap();
    assert_eq!(report.substeps(), 0);
    assert_eq!(sim.accumulator_ms(), 0.0);
    assert_eq!(*sim.bodies(), before);
}

#[test]
fn play_seeds_floored_initial_velocities() {
    let mut sim = sim_with(config_with_step(0.5));
    sim.set_initial_velocity(BodyId::Left, 3.7);
    sim.set_initial_velocity(BodyId::Right, f64::NAN);
    sim.play().unwrap();

    assert_eq!(sim.status(), SimStatus::Running);
    assert_eq!(sim.body(BodyId::Left).velocity, 3.0);
    assert_eq!(sim.body(BodyId::Right).velocity, 0.0);
}

#[test]
fn play_while_running_is_a_no_op() {
    let mut sim = sim_with(config_with_step(0.5));
    sim.play().unwrap();
    sim.tick(10.0).unwrap();

    sim.set_initial_velocity(BodyId::Right, -500.0);
    sim.play().unwrap();
    assert_eq!(sim.body(BodyId::Right).velocity, -50.0);
}

#[test]
fn oversized_frame_runs_the_same_steps_as_the_cap() {
    let mut capped = sim_with(config_with_step(0.5));
    let mut stalled = sim_with(config_with_step(0.5));
    capped.play().unwrap();
    stalled.play().unwrap();

    let a = capped.tick(250.0).unwrap();
    let b = stalled.tick(10_000.0).unwrap();

    assert_eq!(a.substeps(), 500);
    assert_eq!(b.substeps(), a.substeps());
    assert_eq!(b.consumed_ms(), 250.0);
    assert_eq!(capped.bodies(), stalled.bodies());
    assert_eq!(capped.accumulator_ms(), stalled.accumulator_ms());
}

#[test]
fn infinite_frame_runs_the_same_steps_as_the_cap() {
    let mut sim = sim_with(config_with_step(0.5));
    sim.play().unwrap();

    let report = sim.tick(f64::INFINITY).unwrap();
    assert_eq!(report.substeps(), 500);
    assert_eq!(report.consumed_ms(), 250.0);
}

#[test]
fn play_refuses_a_left_block_grown_into_the_right_one() {
    let mut sim = SimulationCore::new();
    // 14 digits -> 280 wide, reaching past the right block at 250
    sim.set_mass(BodyId::Left, 1e13);
    sim.set_mass(BodyId::Right, 1.0);

    let err = sim.play().unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));
    assert_eq!(sim.status(), SimStatus::Idle);
    assert_eq!(sim.tick(1.0).unwrap().substeps(), 0);
    assert_eq!(sim.collision_count(), 0);

    sim.set_mass(BodyId::Left, 1.0);
    sim.play().unwrap();
    sim.tick(1.0).unwrap();
    assert_eq!(sim.collision_count(), 0);
    assert!(sim.body(BodyId::Left).position >= 0.0);
}

#[test]
fn identical_tick_sequences_give_identical_runs() {
    let frames = [16.6, 17.1, 3.3, 250.0, 10_000.0, 0.004, 33.3, 16.7];

    let run_once = || {
        let mut sim = sim_with(hundred_to_one());
        sim.play().unwrap();
        let reports: Vec<TickReport> = frames.iter().map(|&ms| sim.tick(ms).unwrap()).collect();
        (reports, *sim.bodies(), sim.collision_count(), sim.accumulator_ms())
    };

    let first = run_once();
    let second = run_once();
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.2, second.2);
    assert_eq!(first.3.to_bits(), second.3.to_bits());
}

#[test]
fn wall_and_pair_in_one_step_count_twice() {
    let mut config = config_with_step(0.5);
    config.left = crate::config::BodyConfig {
        mass: 1.0,
        position: 0.0,
        velocity: -1.0,
    };
    config.right = crate::config::BodyConfig {
        mass: 1.0,
        position: 20.0,
        velocity: -1.0,
    };
    let mut sim = sim_with(config);
    sim.play().unwrap();

    let report = sim.tick(0.5).unwrap();
    assert_eq!(report.substeps(), 1);
    assert_eq!(report.wall_hits(), 1);
    assert_eq!(report.pair_hits(), 1);
    assert_eq!(report.event(), CollisionEvent::Both);
    assert_eq!(sim.collision_count(), 2);
}

#[test]
fn equal_masses_clack_three_times() {
    let mut config = config_with_step(0.01);
    config.right.mass = 1.0;
    let mut sim = sim_with(config);
    assert_eq!(sim.predicted_collision_total().unwrap(), 3);

    sim.play().unwrap();
    run(&mut sim, 80, 250.0);

    assert_eq!(sim.collision_count(), 3);
    assert_eq!(sim.body(BodyId::Left).velocity, 0.0);
    assert_eq!(sim.body(BodyId::Right).velocity, 50.0);
}

#[test]
fn hundred_to_one_matches_the_predicted_total() {
    let mut sim = sim_with(hundred_to_one());
    assert_eq!(sim.predicted_collision_total().unwrap(), 31);

    sim.play().unwrap();
    let energy = sim.bodies().total_kinetic_energy();

    let mut last = 0;
    for _ in 0..160 {
        sim.tick(250.0).unwrap();
        assert!(sim.collision_count() >= last);
        last = sim.collision_count();
    }

    assert_eq!(sim.collision_count(), 31);
    let left = sim.body(BodyId::Left);
    let right = sim.body(BodyId::Right);
    assert!(left.velocity >= -1e-9);
    assert!(left.velocity <= right.velocity);

    let drift = (sim.bodies().total_kinetic_energy() - energy).abs() / energy;
    assert!(drift < 1e-9, "energy drift {}", drift);
}

#[test]
fn heavy_block_launches_the_light_one_at_twice_its_speed() {
    let mut sim = sim_with(config_with_step(0.01));
    sim.play().unwrap();
    let v2i = sim.body(BodyId::Right).velocity;

    let mut hit = false;
    for _ in 0..5_000 {
        if sim.tick(1.0).unwrap().pair_hits() > 0 {
            hit = true;
            break;
        }
    }
    assert!(hit, "blocks never touched");

    let v1f = sim.body(BodyId::Left).velocity;
    let v2f = sim.body(BodyId::Right).velocity;
    assert!((v1f - 2.0 * v2i).abs() < 1e-3, "v1f={}", v1f);
    assert!((v2f - v2i).abs() < 1e-3, "v2f={}", v2f);
}

#[test]
fn reset_restores_placement_but_keeps_mass() {
    let mut sim = sim_with(hundred_to_one());
    sim.set_mass(BodyId::Left, 5.0);
    sim.play().unwrap();
    run(&mut sim, 20, 250.0);
    assert!(sim.collision_count() > 0);

    sim.reset();

    assert_eq!(sim.status(), SimStatus::Idle);
    assert_eq!(sim.collision_count(), 0);
    assert_eq!(sim.accumulator_ms(), 0.0);
    let left = sim.body(BodyId::Left);
    let right = sim.body(BodyId::Right);
    assert_eq!((left.position, left.velocity), (100.0, 0.0));
    assert_eq!((right.position, right.velocity), (250.0, -50.0));
    assert_eq!(left.mass(), 5.0);
    assert_eq!(right.mass(), 100.0);
}

#[test]
fn set_mass_clamps_and_resizes() {
    let mut sim = SimulationCore::new();

    assert_eq!(sim.set_mass(BodyId::Right, 1e30), 1e16);
    assert_eq!(sim.body(BodyId::Right).size(), 17.0 * 20.0);

    assert_eq!(sim.set_mass(BodyId::Left, -4.0), 0.01);
    assert_eq!(sim.body(BodyId::Left).size(), 5.0);

    assert_eq!(sim.set_mass(BodyId::Left, f64::NAN), 0.01);
    assert_eq!(sim.set_mass(BodyId::Left, 250.0), 250.0);
    assert_eq!(sim.body(BodyId::Left).size(), 60.0);
}

#[test]
fn non_finite_velocity_faults_until_reset() {
    let mut sim = sim_with(config_with_step(0.01));
    sim.set_mass(BodyId::Right, 1e16);
    sim.set_initial_velocity(BodyId::Left, 1.7e308);
    sim.set_initial_velocity(BodyId::Right, -1.7e308);
    sim.play().unwrap();

    let err = sim.tick(0.01).unwrap_err();
    assert!(matches!(
        err,
        SimError::NonFinite {
            body: BodyId::Left,
            quantity: Quantity::Velocity
        }
    ));
    assert_eq!(sim.status(), SimStatus::Faulted);
    assert!(matches!(sim.tick(16.0), Err(SimError::Faulted)));
    assert!(matches!(sim.play(), Err(SimError::Faulted)));

    sim.reset();
    assert_eq!(sim.status(), SimStatus::Idle);
    sim.set_initial_velocity(BodyId::Left, 0.0);
    sim.set_initial_velocity(BodyId::Right, -50.0);
    assert!(sim.play().is_ok());
    assert!(sim.tick(1.0).is_ok());
}

#[test]
fn first_frame_after_play_only_sets_the_reference() {
    let mut sim = sim_with(config_with_step(0.5));
    assert_eq!(sim.tick_at(500.0).unwrap().substeps(), 0);

    sim.play().unwrap();
    assert_eq!(sim.tick_at(1000.0).unwrap().substeps(), 0);
    assert_eq!(sim.tick_at(1000.5).unwrap().substeps(), 1);

    sim.reset();
    sim.play().unwrap();
    // A stale reference would bank 4000 ms here
    assert_eq!(sim.tick_at(5000.0).unwrap().substeps(), 0);
    assert_eq!(sim.accumulator_ms(), 0.0);
}

#[test]
fn snapshot_reflects_state() {
    let sim = SimulationCore::new();
    let snap = sim.snapshot();
    assert_eq!(snap.left.size, 20.0);
    assert_eq!(snap.right.size, 140.0);
    assert_eq!(snap.status, "idle");

    let json = sim.snapshot_json();
    assert!(json.contains("\"collisionCount\":0"));
    assert!(json.contains("\"status\":\"idle\""));
}

#[test]
fn perf_stats_track_the_last_tick() {
    let mut sim = sim_with(config_with_step(0.5));
    sim.enable_perf_metrics(true);
    sim.play().unwrap();
    let report = sim.tick(20.0).unwrap();

    let stats = sim.get_perf_stats();
    assert_eq!(stats.substeps(), report.substeps());
    assert_eq!(stats.ticks(), 1);
    assert!(stats.tick_ms() >= 0.0);

    sim.enable_perf_metrics(false);
    assert_eq!(sim.get_perf_stats().ticks(), 0);
}

#[test]
fn loading_config_returns_to_idle() {
    let mut sim = SimulationCore::new();
    sim.play().unwrap();

    sim.load_config_json(r#"{"fixedStepMs": 0.5, "right": {"mass": 100, "position": 300, "velocity": -10}}"#)
        .unwrap();
    assert_eq!(sim.status(), SimStatus::Idle);
    assert_eq!(sim.config().fixed_step_ms, 0.5);
    assert_eq!(sim.body(BodyId::Right).position, 300.0);
    assert_eq!(sim.initial_velocity(BodyId::Right), -10.0);

    assert!(sim.load_config_json(r#"{"maxFrameMs": -1}"#).is_err());
    assert_eq!(sim.config().fixed_step_ms, 0.5);
}
