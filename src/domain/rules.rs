use rand::Rng;

use super::error::{AutomatonError, Result};
use super::kernel::{DEFAULT_RADIUS, Kernel};
use super::{Cell, Center};

/// Lower bound of the reference activation band.
pub const DEFAULT_P: f64 = 0.2;
/// Upper bound of the reference activation band.
pub const DEFAULT_Q: f64 = 0.4;

/// Trait for cellular automaton rules.
/// A rule declares the neighborhood it reads and maps that neighborhood to
/// the next state of the center cell.
pub trait Rule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Neighborhood radius
    fn radius(&self) -> usize;

    /// Whether the cell itself is part of its neighborhood
    fn center(&self) -> Center;

    /// Number of values in one neighborhood
    fn neighborhood_len(&self) -> usize {
        let side = 2 * self.radius() + 1;
        match self.center() {
            Center::Include => side * side,
            Center::Exclude => side * side - 1,
        }
    }

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighborhood: &[Cell]) -> Cell;
}

/// Conway's Game of Life (B3/S23) over the 8 Moore neighbors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayRule;

impl ConwayRule {
    /// Transition given the number of live neighbors:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next(current: Cell, alive: u8) -> Cell {
        match (current, alive) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Moore neighborhood"
    }

    fn radius(&self) -> usize {
        1
    }

    fn center(&self) -> Center {
        Center::Exclude
    }

    fn evolve(&self, current: Cell, neighborhood: &[Cell]) -> Cell {
        let alive = neighborhood.iter().filter(|cell| cell.is_alive()).count() as u8;
        Self::next(current, alive)
    }
}

/// Weighted-kernel rule: a cell is alive next step iff the kernel-weighted
/// sum `u` of its neighborhood (center included) lies strictly inside `(p, q)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvolutionThresholdRule {
    kernel: Kernel,
    p: f64,
    q: f64,
}

impl ConvolutionThresholdRule {
    pub fn new(kernel: Kernel, p: f64, q: f64) -> Result<Self> {
        if kernel.is_empty() {
            return Err(AutomatonError::UninitializedKernel);
        }
        if !p.is_finite() || !q.is_finite() || p >= q {
            return Err(AutomatonError::InvalidThresholds { p, q });
        }
        Ok(Self { kernel, p, q })
    }

    /// Random radius-5 kernel with the band `(0.2, 0.4)`
    pub fn reference<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            kernel: Kernel::random(DEFAULT_RADIUS, rng),
            p: DEFAULT_P,
            q: DEFAULT_Q,
        }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Activation band `(p, q)`
    pub const fn band(&self) -> (f64, f64) {
        (self.p, self.q)
    }

    /// Map an activation value to a cell; both bounds are exclusive
    pub fn classify(&self, u: f64) -> Cell {
        Cell::from_bool(self.p < u && u < self.q)
    }
}

impl Rule for ConvolutionThresholdRule {
    fn name(&self) -> &'static str {
        "Convolution"
    }

    fn description(&self) -> &'static str {
        "Random kernel, p < u < q"
    }

    fn radius(&self) -> usize {
        self.kernel.radius()
    }

    fn center(&self) -> Center {
        Center::Include
    }

    fn evolve(&self, _current: Cell, neighborhood: &[Cell]) -> Cell {
        self.classify(self.kernel.activation(neighborhood))
    }
}

/// The update rule an automaton runs, tagged by variant
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateRule {
    Discrete(ConwayRule),
    ConvolutionThreshold(ConvolutionThresholdRule),
}

impl UpdateRule {
    pub fn discrete() -> Self {
        UpdateRule::Discrete(ConwayRule)
    }

    /// Reference convolution rule with a freshly drawn kernel
    pub fn convolution<R: Rng + ?Sized>(rng: &mut R) -> Self {
        UpdateRule::ConvolutionThreshold(ConvolutionThresholdRule::reference(rng))
    }

    fn as_rule(&self) -> &dyn Rule {
        match self {
            UpdateRule::Discrete(rule) => rule,
            UpdateRule::ConvolutionThreshold(rule) => rule,
        }
    }

    /// The kernel, for the convolution variant
    pub fn kernel(&self) -> Option<&Kernel> {
        match self {
            UpdateRule::Discrete(_) => None,
            UpdateRule::ConvolutionThreshold(rule) => Some(rule.kernel()),
        }
    }
}

impl From<ConwayRule> for UpdateRule {
    fn from(rule: ConwayRule) -> Self {
        UpdateRule::Discrete(rule)
    }
}

impl From<ConvolutionThresholdRule> for UpdateRule {
    fn from(rule: ConvolutionThresholdRule) -> Self {
        UpdateRule::ConvolutionThreshold(rule)
    }
}

impl Rule for UpdateRule {
    fn name(&self) -> &'static str {
        self.as_rule().name()
    }

    fn description(&self) -> &'static str {
        self.as_rule().description()
    }

    fn radius(&self) -> usize {
        self.as_rule().radius()
    }

    fn center(&self) -> Center {
        self.as_rule().center()
    }

    fn evolve(&self, current: Cell, neighborhood: &[Cell]) -> Cell {
        self.as_rule().evolve(current, neighborhood)
    }
}
