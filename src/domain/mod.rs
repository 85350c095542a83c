mod cell;
mod grid;
mod engine;
mod scheduler;

pub use cell::Cell;
pub use grid::{GridState, DEFAULT_LIVE_PROBABILITY};
pub use engine::{TransitionEngine, NEIGHBOR_OFFSETS, DEFAULT_PARALLEL_THRESHOLD};
pub use scheduler::{FixedStepScheduler, DriftPolicy, DEFAULT_TICK_INTERVAL};
