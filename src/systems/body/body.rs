use crate::error::Quantity;

use super::size::SizeRule;

/// One sliding block
///
/// `mass` and `size` are private so that size can never go stale: the only
/// way to change mass is [`Body::set_mass`], which recomputes size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Left edge of the occupied interval
    pub position: f64,
    /// Units per second, signed (negative moves toward the wall)
    pub velocity: f64,
    mass: f64,
    size: f64,
    size_rule: SizeRule,
}

impl Body {
    pub fn new(mass: f64, position: f64, velocity: f64, size_rule: SizeRule) -> Self {
        Self {
            position,
            velocity,
            mass,
            size: size_rule.size_for(mass),
            size_rule,
        }
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn right_edge(&self) -> f64 {
        self.position + self.size
    }

    /// Set a mass the caller has already clamped to the configured range
    pub fn set_mass(&mut self, mass: f64) {
        debug_assert!(mass > 0.0, "mass must be clamped before reaching a body");
        self.mass = mass;
        self.size = self.size_rule.size_for(mass);
    }

    /// Pure displacement; keeping the body in bounds is the resolver's job.
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }

    /// First quantity that is NaN or infinite, if any
    pub fn non_finite(&self) -> Option<Quantity> {
        if !self.position.is_finite() {
            Some(Quantity::Position)
        } else if !self.velocity.is_finite() {
            Some(Quantity::Velocity)
        } else {
            None
        }
    }
}
