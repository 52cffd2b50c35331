//! SimulationClock - fixed-timestep accumulator
//!
//! Wall-clock frame time is banked into an accumulator and drained in
//! constant `fixed_step_ms` slices. The step is deliberately tiny so that
//! contact detection is effectively continuous within one rendered frame.
//! Frames longer than `max_frame_ms` (tab in background, debugger pause) are
//! clamped so a stall never turns into unbounded catch-up work.

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    fixed_step_ms: f64,
    max_frame_ms: f64,
    accumulator_ms: f64,
    last_timestamp_ms: Option<f64>,
}

impl SimulationClock {
    pub fn new(fixed_step_ms: f64, max_frame_ms: f64) -> Self {
        debug_assert!(fixed_step_ms > 0.0);
        Self {
            fixed_step_ms,
            max_frame_ms,
            accumulator_ms: 0.0,
            last_timestamp_ms: None,
        }
    }

    pub fn fixed_step_ms(&self) -> f64 {
        self.fixed_step_ms
    }

    pub fn max_frame_ms(&self) -> f64 {
        self.max_frame_ms
    }

    /// Step length in seconds, the unit velocities are expressed in
    pub fn step_seconds(&self) -> f64 {
        self.fixed_step_ms / 1000.0
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Bank a frame delta. Returns the delta actually added after clamping.
    ///
    /// Negative and NaN deltas add nothing; `+inf` is clamped like any long frame.
    pub fn accumulate(&mut self, wall_delta_ms: f64) -> f64 {
        let delta = if wall_delta_ms > 0.0 {
            wall_delta_ms.min(self.max_frame_ms)
        } else {
            0.0
        };
        self.accumulator_ms += delta;
        delta
    }

    /// Take one fixed step out of the accumulator if a whole one is banked
    #[inline]
    pub fn try_consume_step(&mut self) -> bool {
        if self.accumulator_ms >= self.fixed_step_ms {
            self.accumulator_ms -= self.fixed_step_ms;
            true
        } else {
            false
        }
    }

    /// Turn an animation-frame timestamp into a delta.
    ///
    /// The first timestamp after [`clear_timestamp`](Self::clear_timestamp)
    /// only becomes the reference and yields `None`.
    pub fn frame_delta(&mut self, timestamp_ms: f64) -> Option<f64> {
        self.last_timestamp_ms
            .replace(timestamp_ms)
            .map(|last| timestamp_ms - last)
    }

    pub fn clear_timestamp(&mut self) {
        self.last_timestamp_ms = None;
    }

    /// Drop banked time and the timestamp reference
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
        self.last_timestamp_ms = None;
    }
}
