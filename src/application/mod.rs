mod config;
mod simulation;

pub use config::{ConfigError, SimulationConfig, Variant};
pub use simulation::Simulation;
