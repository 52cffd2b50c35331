//! Integrator - one atomic physics step
//!
//! Explicit Euler displacement of both blocks (left, then right), followed by
//! contact resolution on the new positions. Velocities only change at
//! contacts, so there is no force model to integrate.

use crate::body::BodyPair;
use crate::collision::{resolve_contacts, StepContacts};

/// Advance both bodies by `dt` seconds and resolve contacts
#[inline]
pub fn advance(bodies: &mut BodyPair, dt: f64) -> StepContacts {
    bodies.left.integrate(dt);
    bodies.right.integrate(dt);
    resolve_contacts(bodies)
}
