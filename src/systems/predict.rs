//! Collision predictor - exact event-driven count, no time stepping
//!
//! Jumps from contact to contact instead of sub-stepping, so it yields the
//! total number of clacks a configuration will produce (31 for a 100:1 mass
//! ratio, 3141 for 1e6:1, ...). The UI uses it to show the expected total,
//! and tests use it to check the stepped simulation.
//!
//! Sweeps over many mass ratios run on rayon when the `parallel` feature is on.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::body::{Body, BodyPair, SizeRule};
use crate::collision::{elastic_velocities, resolve_wall};
use crate::config::WALL_POSITION;
use crate::error::{Result, SimError};

/// Enough for a 1e16:1 mass ratio (314,159,265 collisions)
pub const DEFAULT_EVENT_LIMIT: u64 = 400_000_000;

/// Count the collisions `bodies` will go through from their current state.
///
/// Fails with [`SimError::PredictionLimit`] once `limit` events are exceeded.
pub fn predict_collision_total(bodies: &BodyPair, limit: u64) -> Result<u64> {
    let mut left = bodies.left;
    let mut right = bodies.right;
    let total = left.mass() + right.mass();
    if !(total.is_finite() && total > 0.0) {
        return Err(SimError::DegenerateMass {
            left: left.mass(),
            right: right.mass(),
        });
    }

    let mut count = 0u64;
    loop {
        let to_wall = if left.velocity < 0.0 {
            ((left.position - WALL_POSITION) / -left.velocity).max(0.0)
        } else {
            f64::INFINITY
        };
        let closing = left.velocity - right.velocity;
        let to_pair = if closing > 0.0 {
            ((right.position - left.right_edge()) / closing).max(0.0)
        } else {
            f64::INFINITY
        };

        if to_wall.is_infinite() && to_pair.is_infinite() {
            return Ok(count);
        }

        // Ties go to the wall, same order as the stepped resolver.
        if to_wall <= to_pair {
            drift(&mut left, &mut right, to_wall);
            left.position = WALL_POSITION;
            resolve_wall(&mut left);
        } else {
            drift(&mut left, &mut right, to_pair);
            left.position = right.position - left.size();
            let (v1, v2) =
                elastic_velocities(left.mass(), left.velocity, right.mass(), right.velocity);
            left.velocity = v1;
            right.velocity = v2;
        }

        count += 1;
        if count > limit {
            return Err(SimError::PredictionLimit(limit));
        }
    }
}

/// Total for a light block at rest struck by a block `ratio` times heavier
pub fn collisions_for_mass_ratio(ratio: f64, limit: u64) -> Result<u64> {
    let rule = SizeRule::default();
    let bodies = BodyPair::new(
        Body::new(1.0, 100.0, 0.0, rule),
        Body::new(ratio, 250.0, -1.0, rule),
    );
    predict_collision_total(&bodies, limit)
}

/// Mass ratios 1, 100, 100^2, ... whose totals spell the first `digits` digits of pi
pub fn pi_digit_ratios(digits: u32) -> Vec<f64> {
    (0..digits).map(|k| 100f64.powi(k as i32)).collect()
}

/// Predict totals for many mass ratios at once
pub fn sweep_mass_ratios(ratios: &[f64], limit: u64) -> Vec<Result<u64>> {
    #[cfg(feature = "parallel")]
    {
        ratios
            .par_iter()
            .map(|&ratio| collisions_for_mass_ratio(ratio, limit))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        ratios
            .iter()
            .map(|&ratio| collisions_for_mass_ratio(ratio, limit))
            .collect()
    }
}

#[inline]
fn drift(left: &mut Body, right: &mut Body, dt: f64) {
    left.integrate(dt);
    right.integrate(dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_ratios_of_powers_of_100_count_pi_digits() {
        let totals: Vec<u64> = pi_digit_ratios(5)
            .into_iter()
            .map(|r| collisions_for_mass_ratio(r, DEFAULT_EVENT_LIMIT).unwrap())
            .collect();
        assert_eq!(totals, vec![3, 31, 314, 3141, 31415]);
    }

    #[test]
    fn sweep_matches_single_predictions() {
        let ratios = [1.0, 100.0, 10_000.0];
        let swept: Vec<u64> = sweep_mass_ratios(&ratios, DEFAULT_EVENT_LIMIT)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(swept, vec![3, 31, 314]);
    }

    #[test]
    fn limit_is_enforced() {
        let err = collisions_for_mass_ratio(1_000_000.0, 100).unwrap_err();
        assert!(matches!(err, SimError::PredictionLimit(100)));
    }

    #[test]
    fn receding_bodies_never_collide() {
        let rule = SizeRule::default();
        let bodies = BodyPair::new(
            Body::new(1.0, 100.0, 0.0, rule),
            Body::new(5.0, 250.0, 10.0, rule),
        );
        assert_eq!(predict_collision_total(&bodies, 10).unwrap(), 0);
    }

    #[test]
    fn wall_first_when_it_is_closer_in_time() {
        // Left block drifts to the wall (10 s) long before the right block
        // catches it, so the sequence starts with a wall bounce.
        let rule = SizeRule::default();
        let bodies = BodyPair::new(
            Body::new(1.0, 10.0, -1.0, rule),
            Body::new(1.0, 1000.0, -2.0, rule),
        );
        // wall, pair (equal masses swap), wall, pair
        assert_eq!(predict_collision_total(&bodies, 10).unwrap(), 4);
    }
}
