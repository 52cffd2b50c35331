//! Systems - the physics pieces, leaf to root
//!
//! - body:       block state and mass -> size rule
//! - integrator: one fixed physics step
//! - collision:  wall / pair detection and elastic resolution
//! - clock:      frame time -> fixed sub-steps
//! - predict:    exact event-driven collision totals

pub mod body;
pub mod clock;
pub mod collision;
pub mod integrator;
pub mod predict;
