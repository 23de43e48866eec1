mod automaton;
mod cell;
mod error;
mod kernel;
mod lattice;
mod patterns;
mod rules;

pub use automaton::Automaton;
pub use cell::Cell;
pub use error::{AutomatonError, Result};
pub use kernel::{DEFAULT_RADIUS, Kernel};
pub use lattice::{Center, Lattice};
pub use patterns::{Pattern, presets};
pub use rules::{ConvolutionThresholdRule, ConwayRule, DEFAULT_P, DEFAULT_Q, Rule, UpdateRule};
