//! Run configuration parsed from the command line.

use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    Automaton, AutomatonError, ConvolutionThresholdRule, DEFAULT_P, DEFAULT_Q, DEFAULT_RADIUS,
    Kernel, UpdateRule, presets,
};

/// Which update rule to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Game of Life over the 8 Moore neighbors
    #[default]
    Discrete,
    /// Random-kernel convolution with an activation band
    Convolution,
}

impl Variant {
    /// Grid size used when none is given on the command line
    pub const fn default_dimensions(self) -> (usize, usize) {
        match self {
            Variant::Discrete => (200, 200),
            Variant::Convolution => (100, 100),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("frame interval must be a finite, non-negative number of milliseconds, got {0}")]
    InvalidInterval(f32),
}

#[derive(Parser, Debug, Clone)]
#[command(name = "lattice-life", about = "Animate cellular automata on a torus")]
pub struct SimulationConfig {
    /// Update rule
    #[arg(long, value_enum, default_value_t = Variant::Discrete)]
    pub variant: Variant,

    /// Number of rows (default depends on the variant)
    #[arg(long)]
    pub length: Option<usize>,

    /// Number of columns (default depends on the variant)
    #[arg(long)]
    pub width: Option<usize>,

    /// Number of generations to animate
    #[arg(long, default_value_t = 100)]
    pub steps: u64,

    /// Delay between generations, in milliseconds
    #[arg(long, default_value_t = 0.1)]
    pub interval_ms: f32,

    /// Kernel radius for the convolution variant
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: usize,

    /// Lower bound of the activation band (exclusive)
    #[arg(short, default_value_t = DEFAULT_P)]
    pub p: f64,

    /// Upper bound of the activation band (exclusive)
    #[arg(short, default_value_t = DEFAULT_Q)]
    pub q: f64,

    /// Seed for the kernel and initial lattice; OS entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seed the lattice with a preset pattern instead of random noise
    #[arg(long)]
    pub pattern: Option<String>,

    /// Log the kernel weights at startup
    #[arg(long)]
    pub print_kernel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            length: None,
            width: None,
            steps: 100,
            interval_ms: 0.1,
            radius: DEFAULT_RADIUS,
            p: DEFAULT_P,
            q: DEFAULT_Q,
            seed: None,
            pattern: None,
            print_kernel: false,
        }
    }
}

impl SimulationConfig {
    /// Resolved `(length, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        let (length, width) = self.variant.default_dimensions();
        (self.length.unwrap_or(length), self.width.unwrap_or(width))
    }

    /// Frame interval in seconds
    pub fn interval_secs(&self) -> Result<f32, ConfigError> {
        if !self.interval_ms.is_finite() || self.interval_ms < 0.0 {
            return Err(ConfigError::InvalidInterval(self.interval_ms));
        }
        Ok(self.interval_ms / 1000.0)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build the automaton described by this configuration, with its
    /// lattice randomized or seeded from the requested pattern
    pub fn build_automaton(&self) -> Result<Automaton, ConfigError> {
        let (length, width) = self.dimensions();
        let mut rng = self.rng();

        let rule = match self.variant {
            Variant::Discrete => UpdateRule::discrete(),
            Variant::Convolution => {
                let kernel = Kernel::random(self.radius, &mut rng);
                ConvolutionThresholdRule::new(kernel, self.p, self.q)?.into()
            }
        };
        let mut automaton = Automaton::new(length, width, rule)?;

        match &self.pattern {
            Some(name) => {
                let pattern =
                    presets::find(name).ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?;
                let x = length.saturating_sub(pattern.length) / 2;
                let y = width.saturating_sub(pattern.width) / 2;
                automaton.lattice_mut().place(&pattern, x, y);
                debug!(pattern = pattern.name, x, y, "placed pattern");
            }
            None => automaton.initialize_random_with(&mut rng),
        }

        Ok(automaton)
    }
}
