// Domain layer - lattice, rules and the automaton
pub mod domain;

// Application layer - configuration and frame-driven simulation
pub mod application;

// Infrastructure layer - rendering
pub mod rendering;

// Re-exports for convenience
pub use domain::{Automaton, AutomatonError, Cell, Kernel, Lattice, UpdateRule};
pub use application::{Simulation, SimulationConfig, Variant};
