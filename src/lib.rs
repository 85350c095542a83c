// Domain layer - grid, transition rule, fixed-step scheduling
pub mod domain;

// Application layer - configuration and the menu/run/pause controller
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

mod error;

// Re-exports for convenience
pub use domain::{Cell, GridState, TransitionEngine, FixedStepScheduler, DriftPolicy};
pub use application::{Command, Phase, SimConfig, SimulationController};
pub use error::{Result, SimError};
