//! Error types for automaton construction.

use thiserror::Error;

/// Errors raised while building a lattice, kernel or rule.
///
/// Stepping an automaton never fails; every error here is reported at
/// construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutomatonError {
    /// A lattice dimension was zero.
    #[error("invalid lattice dimensions {length}x{width}: both must be positive")]
    InvalidDimensions {
        /// Number of rows requested.
        length: usize,
        /// Number of columns requested.
        width: usize,
    },

    /// The convolution rule was given no kernel weights.
    #[error("convolution rule evaluated without a kernel")]
    UninitializedKernel,

    /// Weight count does not match `(2r+1)^2`.
    #[error("kernel of radius {radius} needs {expected} weights, got {got}")]
    KernelSizeMismatch {
        radius: usize,
        expected: usize,
        got: usize,
    },

    /// Weights were negative, non-finite, or summed to zero.
    #[error("kernel weights must be finite, non-negative and have a positive sum")]
    InvalidKernelWeights,

    /// Activation band is empty or non-finite.
    #[error("activation band requires finite p < q, got p={p}, q={q}")]
    InvalidThresholds { p: f64, q: f64 },
}

/// Result alias for automaton construction.
pub type Result<T> = std::result::Result<T, AutomatonError>;
