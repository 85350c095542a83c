use crate::domain::{
    DriftPolicy, DEFAULT_LIVE_PROBABILITY, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TICK_INTERVAL,
};
use crate::error::{Result, SimError};

/// Construction-time settings for a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Seconds between generations while running.
    pub tick_interval: f32,
    /// Share of cells brought to life by a randomize command.
    pub live_probability: f64,
    /// Handling of frame time left over after a tick.
    pub drift: DriftPolicy,
    /// Whether randomize and clear are accepted while paused.
    /// `false` limits them to the running phase.
    pub bulk_edits_while_paused: bool,
    /// Cell count at which generations are computed on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            tick_interval: DEFAULT_TICK_INTERVAL,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            drift: DriftPolicy::default(),
            bulk_edits_while_paused: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SimConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: f32) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_live_probability(mut self, live_probability: f64) -> Self {
        self.live_probability = live_probability;
        self
    }

    pub fn with_drift(mut self, drift: DriftPolicy) -> Self {
        self.drift = drift;
        self
    }

    pub fn with_bulk_edits_while_paused(mut self, allowed: bool) -> Self {
        self.bulk_edits_while_paused = allowed;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SimError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "tick interval must be positive and finite, got {}",
                self.tick_interval
            )));
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(SimError::InvalidConfiguration(format!(
                "live probability must be within [0, 1], got {}",
                self.live_probability
            )));
        }
        Ok(())
    }
}
