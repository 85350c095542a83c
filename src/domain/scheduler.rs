use super::{GridState, TransitionEngine};
use crate::error::{Result, SimError};

/// Default seconds between generations (10 generations per second)
pub const DEFAULT_TICK_INTERVAL: f32 = 0.1;

/// What happens to time left over once a tick fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DriftPolicy {
    /// Drop the surplus. Under uneven frame times the simulation runs slow.
    ResetToZero,
    /// Keep the fractional surplus so the tick phase is preserved.
    /// Whole missed intervals are still dropped: one step per call at most.
    #[default]
    CarryRemainder,
}

/// Fixed-step scheduler decoupling generation rate from frame rate
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStepScheduler {
    accumulator: f32,
    tick_interval: f32,
    running: bool,
    drift: DriftPolicy,
}

impl FixedStepScheduler {
    /// Create a paused scheduler
    pub fn new(tick_interval: f32, drift: DriftPolicy) -> Result<Self> {
        if !(tick_interval.is_finite() && tick_interval > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "tick interval must be positive and finite, got {tick_interval}"
            )));
        }

        Ok(Self {
            accumulator: 0.0,
            tick_interval,
            running: false,
            drift,
        })
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Pause or resume; the accumulator is kept as is
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub const fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub const fn tick_interval(&self) -> f32 {
        self.tick_interval
    }

    pub const fn drift_policy(&self) -> DriftPolicy {
        self.drift
    }

    /// Feed one frame's elapsed time. Returns true when a generation was committed.
    ///
    /// At most one step runs per call no matter how large `dt` is.
    pub fn advance(&mut self, dt: f32, grid: &mut GridState, engine: &TransitionEngine) -> Result<bool> {
        if !self.running {
            return Ok(false);
        }

        // Non-finite and negative frame times count as no time passing
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }

        if self.accumulator < self.tick_interval {
            return Ok(false);
        }

        engine.advance(grid)?;

        self.accumulator = match self.drift {
            DriftPolicy::ResetToZero => 0.0,
            DriftPolicy::CarryRemainder => {
                let carry = (self.accumulator - self.tick_interval) % self.tick_interval;
                if carry.is_finite() { carry.max(0.0) } else { 0.0 }
            }
        };
        log::trace!("tick fired, accumulator carried {:.4}s", self.accumulator);

        Ok(true)
    }
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self {
            accumulator: 0.0,
            tick_interval: DEFAULT_TICK_INTERVAL,
            running: false,
            drift: DriftPolicy::default(),
        }
    }
}
