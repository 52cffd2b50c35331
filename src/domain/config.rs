//! Simulation configuration
//!
//! Every tunable the demo variants disagree on (size scale, minimum visual
//! size, mass clamp range) lives here instead of being hard-coded. Loaded from
//! JSON with camelCase keys; any missing key falls back to the default.

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};
use crate::body::SizeRule;

/// Pixels of block width per decimal digit of the mass
pub const DEFAULT_SIZE_SCALE: f64 = 20.0;
/// Block width used for masses below 1
pub const DEFAULT_MIN_VISUAL_SIZE: f64 = 5.0;
pub const DEFAULT_MIN_MASS: f64 = 0.01;
pub const DEFAULT_MAX_MASS: f64 = 1e16;
/// Simulation sub-step, in milliseconds
pub const DEFAULT_FIXED_STEP_MS: f64 = 0.0001;
/// Longest frame the clock will bank in one tick
pub const DEFAULT_MAX_FRAME_MS: f64 = 250.0;
/// The wall sits at the origin; bodies live to its right
pub const WALL_POSITION: f64 = 0.0;

/// Initial placement and motion of one block
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyConfig {
    pub mass: f64,
    pub position: f64,
    pub velocity: f64,
}

/// Inclusive mass clamp applied to every user-supplied mass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MassRange {
    pub min: f64,
    pub max: f64,
}

impl MassRange {
    /// Clamp a raw input value. NaN falls to the minimum; nothing is rejected.
    pub fn clamp(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return self.min;
        }
        raw.clamp(self.min, self.max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    pub size_scale: f64,
    /// `None` keeps the digit-count rule for masses below 1
    pub min_visual_size: Option<f64>,
    pub min_mass: f64,
    pub max_mass: f64,
    pub fixed_step_ms: f64,
    pub max_frame_ms: f64,
    pub left: BodyConfig,
    pub right: BodyConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            size_scale: DEFAULT_SIZE_SCALE,
            min_visual_size: Some(DEFAULT_MIN_VISUAL_SIZE),
            min_mass: DEFAULT_MIN_MASS,
            max_mass: DEFAULT_MAX_MASS,
            fixed_step_ms: DEFAULT_FIXED_STEP_MS,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
            left: BodyConfig {
                mass: 1.0,
                position: 100.0,
                velocity: 0.0,
            },
            right: BodyConfig {
                mass: 1_000_000.0,
                position: 250.0,
                velocity: -50.0,
            },
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn size_rule(&self) -> SizeRule {
        SizeRule {
            scale: self.size_scale,
            min_visual_size: self.min_visual_size,
        }
    }

    pub fn mass_range(&self) -> MassRange {
        MassRange {
            min: self.min_mass,
            max: self.max_mass,
        }
    }

    /// Sub-step length handed to the integrator (velocities are per second)
    pub fn step_seconds(&self) -> f64 {
        self.fixed_step_ms / 1000.0
    }

    /// Reject configurations the engine cannot run.
    ///
    /// Initial masses are checked after clamping, since that is what the
    /// simulation will actually place.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("sizeScale", self.size_scale),
            ("minMass", self.min_mass),
            ("maxMass", self.max_mass),
            ("fixedStepMs", self.fixed_step_ms),
            ("maxFrameMs", self.max_frame_ms),
            ("left.mass", self.left.mass),
            ("left.position", self.left.position),
            ("left.velocity", self.left.velocity),
            ("right.mass", self.right.mass),
            ("right.position", self.right.position),
            ("right.velocity", self.right.velocity),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        if self.fixed_step_ms <= 0.0 {
            return Err(invalid(format!(
                "fixedStepMs must be positive, got {}",
                self.fixed_step_ms
            )));
        }
        if self.max_frame_ms <= 0.0 {
            return Err(invalid(format!(
                "maxFrameMs must be positive, got {}",
                self.max_frame_ms
            )));
        }
        if self.size_scale <= 0.0 {
            return Err(invalid(format!(
                "sizeScale must be positive, got {}",
                self.size_scale
            )));
        }
        if let Some(min_size) = self.min_visual_size {
            if !(min_size.is_finite() && min_size > 0.0) {
                return Err(invalid(format!(
                    "minVisualSize must be positive, got {}",
                    min_size
                )));
            }
        }
        if self.min_mass <= 0.0 {
            return Err(invalid(format!(
                "minMass must be positive, got {}",
                self.min_mass
            )));
        }
        if self.min_mass > self.max_mass {
            return Err(invalid(format!(
                "minMass {} exceeds maxMass {}",
                self.min_mass, self.max_mass
            )));
        }

        // The accumulator must be able to drain a full frame, and the step
        // count of one frame must fit a u32.
        if self.max_frame_ms - self.fixed_step_ms == self.max_frame_ms
            || self.max_frame_ms / self.fixed_step_ms > u32::MAX as f64
        {
            return Err(invalid(format!(
                "fixedStepMs {} is too small for maxFrameMs {}",
                self.fixed_step_ms, self.max_frame_ms
            )));
        }

        let range = self.mass_range();
        let rule = self.size_rule();
        check_placement(
            self.left.position,
            rule.size_for(range.clamp(self.left.mass)),
            self.right.position,
        )
    }
}

/// Left body must sit between the wall and the right body without overlap.
pub fn check_placement(left_position: f64, left_size: f64, right_position: f64) -> Result<()> {
    if left_position < WALL_POSITION {
        return Err(invalid(format!(
            "left body starts behind the wall at {}",
            left_position
        )));
    }
    if left_position + left_size > right_position {
        return Err(invalid(format!(
            "left body [{}, {}] overlaps right body at {}",
            left_position,
            left_position + left_size,
            right_position
        )));
    }
    Ok(())
}

fn invalid(msg: String) -> SimError {
    SimError::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = SimConfig::from_json(r#"{"fixedStepMs": 0.5, "sizeScale": 30}"#).unwrap();
        assert_eq!(config.fixed_step_ms, 0.5);
        assert_eq!(config.size_scale, 30.0);
        assert_eq!(config.max_frame_ms, DEFAULT_MAX_FRAME_MS);
        assert_eq!(config.right.mass, 1_000_000.0);
    }

    #[test]
    fn null_min_visual_size_disables_the_floor() {
        let config = SimConfig::from_json(r#"{"minVisualSize": null}"#).unwrap();
        assert_eq!(config.min_visual_size, None);
        assert_eq!(config.size_rule().size_for(0.5), DEFAULT_SIZE_SCALE);
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let err = SimConfig::from_json(r#"{"fixedStepMs": 0}"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn step_too_small_for_the_frame_cap_is_rejected() {
        // Absorbed by a 250 ms accumulator, would never drain
        let absorbed = SimConfig {
            fixed_step_ms: 1e-15,
            ..SimConfig::default()
        };
        assert!(matches!(absorbed.validate(), Err(SimError::InvalidConfig(_))));

        // Drains, but a full frame overflows the per-tick step counter
        let too_many = SimConfig {
            fixed_step_ms: 1e-8,
            ..SimConfig::default()
        };
        assert!(matches!(too_many.validate(), Err(SimError::InvalidConfig(_))));

        let smallest_ok = SimConfig {
            fixed_step_ms: 250.0 / u32::MAX as f64 * 1.01,
            ..SimConfig::default()
        };
        assert!(smallest_ok.validate().is_ok());
    }

    #[test]
    fn placement_check_covers_wall_and_overlap() {
        assert!(check_placement(0.0, 20.0, 20.0).is_ok());
        assert!(matches!(
            check_placement(-1.0, 20.0, 250.0),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(matches!(
            check_placement(100.0, 280.0, 250.0),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn inverted_mass_range_is_rejected() {
        let config = SimConfig {
            min_mass: 10.0,
            max_mass: 1.0,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn overlapping_placement_is_rejected() {
        let mut config = SimConfig::default();
        config.left.position = 240.0;
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn mass_range_clamps_silently() {
        let range = SimConfig::default().mass_range();
        assert_eq!(range.clamp(-3.0), DEFAULT_MIN_MASS);
        assert_eq!(range.clamp(f64::NAN), DEFAULT_MIN_MASS);
        assert_eq!(range.clamp(1e30), DEFAULT_MAX_MASS);
        assert_eq!(range.clamp(f64::INFINITY), DEFAULT_MAX_MASS);
        assert_eq!(range.clamp(42.0), 42.0);
    }

    #[test]
    fn json_round_trip_keeps_camel_case_keys() {
        let json = SimConfig::default().to_json();
        assert!(json.contains("\"fixedStepMs\""));
        assert!(json.contains("\"minVisualSize\":5.0"));
    }
}
