//! CollisionResolver - wall and block contact in one dimension
//!
//! Two independent checks per physics step, both on post-integration
//! positions and always both evaluated:
//! 1. Wall: left block at or behind the wall -> clamp to wall, reflect velocity
//! 2. Pair: left block touching or overlapping the right block -> snap back to
//!    contact, exchange velocities elastically
//!
//! Penetration is resolved by snapping the left block, never by rewinding time.

use wasm_bindgen::prelude::*;

use crate::body::{Body, BodyPair};
use crate::config::WALL_POSITION;

/// Contacts resolved during a single physics step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepContacts {
    pub wall: bool,
    pub pair: bool,
}

impl StepContacts {
    #[inline]
    pub fn any(&self) -> bool {
        self.wall || self.pair
    }

    /// Collisions to add to the counter (0, 1 or 2)
    #[inline]
    pub fn count(&self) -> u64 {
        self.wall as u64 + self.pair as u64
    }
}

/// One-shot "a clack happened this tick" signal for the audio side.
///
/// Any number of collisions within a tick collapse into one value.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionEvent {
    None = 0,
    Wall = 1,
    Pair = 2,
    Both = 3,
}

impl Default for CollisionEvent {
    fn default() -> Self {
        CollisionEvent::None
    }
}

impl CollisionEvent {
    fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            1 => CollisionEvent::Wall,
            2 => CollisionEvent::Pair,
            3 => CollisionEvent::Both,
            _ => CollisionEvent::None,
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }

    /// Fold one step's contacts into the tick's event
    pub fn merge(self, contacts: StepContacts) -> Self {
        let step = (contacts.wall as u8) | ((contacts.pair as u8) << 1);
        Self::from_bits(self.bits() | step)
    }

    pub fn is_some(self) -> bool {
        self != CollisionEvent::None
    }
}

/// Reflect a body off the infinite-mass wall at the origin
pub fn resolve_wall(body: &mut Body) -> bool {
    if body.position > WALL_POSITION {
        return false;
    }
    body.position = WALL_POSITION;
    body.velocity = -body.velocity;
    true
}

/// Resolve contact between the left and right block
pub fn resolve_pair(left: &mut Body, right: &mut Body) -> bool {
    if left.right_edge() < right.position {
        return false;
    }
    left.position = right.position - left.size();

    let (v1, v2) = elastic_velocities(left.mass(), left.velocity, right.mass(), right.velocity);
    left.velocity = v1;
    right.velocity = v2;
    true
}

/// Post-collision velocities of a 1-D perfectly elastic collision.
///
/// Both velocities are reflected about the center-of-mass velocity:
/// `v_f = 2 * v_cm - v_i`. The mass weights are formed before multiplying by
/// velocity, so a 1e16:1 mass ratio loses the light body's share to rounding
/// instead of cancelling two huge momenta against each other.
#[inline]
pub fn elastic_velocities(m1: f64, v1: f64, m2: f64, v2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v_cm = (m1 / total) * v1 + (m2 / total) * v2;
    (2.0 * v_cm - v1, 2.0 * v_cm - v2)
}

/// Wall check on the left body, then pair check. No short-circuit.
pub fn resolve_contacts(bodies: &mut BodyPair) -> StepContacts {
    let wall = resolve_wall(&mut bodies.left);
    let pair = resolve_pair(&mut bodies.left, &mut bodies.right);
    StepContacts { wall, pair }
}
