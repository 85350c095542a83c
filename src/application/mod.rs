mod config;
mod controller;

pub use config::SimConfig;
pub use controller::{Command, Phase, SimulationController};
