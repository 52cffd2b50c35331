//! Error types for the clack engine.

use std::fmt;

use thiserror::Error;

use crate::body::BodyId;

/// Which body quantity went bad during a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    Position,
    Velocity,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Position => f.write_str("position"),
            Quantity::Velocity => f.write_str("velocity"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("combined mass must be positive and finite (left={left}, right={right})")]
    DegenerateMass { left: f64, right: f64 },

    #[error("{quantity} of {body} body became non-finite")]
    NonFinite { body: BodyId, quantity: Quantity },

    #[error("simulation faulted; reset required")]
    Faulted,

    #[error("collision prediction exceeded {0} events")]
    PredictionLimit(u64),
}

pub type Result<T> = std::result::Result<T, SimError>;
