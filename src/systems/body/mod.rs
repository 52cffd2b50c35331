//! Body - the two sliding blocks
//!
//! - `Body`: mass, position, velocity, derived size
//! - `SizeRule`: mass -> width mapping (configurable per demo variant)
//! - `BodyPair`: ordered (left, right) pair; left sits between wall and right

use std::fmt;

use wasm_bindgen::prelude::*;

use crate::error::{Result, SimError};

mod body;
mod size;

pub use body::Body;
pub use size::{digit_count, SizeRule};

/// Which block a command or getter targets
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Left = 0,
    Right = 1,
}

impl BodyId {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyId::Left => f.write_str("left"),
            BodyId::Right => f.write_str("right"),
        }
    }
}

/// Left (wall side) and right block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPair {
    pub left: Body,
    pub right: Body,
}

impl BodyPair {
    pub fn new(left: Body, right: Body) -> Self {
        Self { left, right }
    }

    pub fn get(&self, id: BodyId) -> &Body {
        match id {
            BodyId::Left => &self.left,
            BodyId::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, id: BodyId) -> &mut Body {
        match id {
            BodyId::Left => &mut self.left,
            BodyId::Right => &mut self.right,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.left.mass() + self.right.mass()
    }

    pub fn total_momentum(&self) -> f64 {
        self.left.momentum() + self.right.momentum()
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.left.kinetic_energy() + self.right.kinetic_energy()
    }

    /// Fail on the first NaN/infinite position or velocity (left first)
    pub fn check_finite(&self) -> Result<()> {
        for id in [BodyId::Left, BodyId::Right] {
            if let Some(quantity) = self.get(id).non_finite() {
                return Err(SimError::NonFinite { body: id, quantity });
            }
        }
        Ok(())
    }
}
