//! Convolution kernel for the threshold rule.
//!
//! A kernel of radius `r` holds `(2r+1)^2` non-negative weights summing to 1,
//! laid out in the same reading order as [`Lattice::neighborhood`]
//! (outer loop over the row offset, inner over the column offset).
//!
//! [`Lattice::neighborhood`]: super::Lattice::neighborhood

use rand::Rng;

use super::Cell;
use super::error::{AutomatonError, Result};

/// Radius of the reference convolution neighborhood (121 cells).
pub const DEFAULT_RADIUS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    radius: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Number of weights a kernel of `radius` carries
    pub const fn len_for(radius: usize) -> usize {
        (2 * radius + 1) * (2 * radius + 1)
    }

    /// Draw i.i.d. uniform weights in `[0, 1)` and normalize them.
    ///
    /// A draw summing to zero is thrown away and re-drawn.
    pub fn random<R: Rng + ?Sized>(radius: usize, rng: &mut R) -> Self {
        let len = Self::len_for(radius);
        loop {
            let weights: Vec<f64> = (0..len).map(|_| rng.random::<f64>()).collect();
            if let Ok(kernel) = Self::from_weights(radius, weights) {
                return kernel;
            }
        }
    }

    /// Build a kernel from explicit weights, normalizing them to sum to 1
    pub fn from_weights(radius: usize, weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(AutomatonError::UninitializedKernel);
        }
        let expected = Self::len_for(radius);
        if weights.len() != expected {
            return Err(AutomatonError::KernelSizeMismatch {
                radius,
                expected,
                got: weights.len(),
            });
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AutomatonError::InvalidKernelWeights);
        }
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(AutomatonError::InvalidKernelWeights);
        }
        let weights = weights.into_iter().map(|w| w / sum).collect();
        Ok(Self { radius, weights })
    }

    /// Equal weight on every position
    pub fn uniform(radius: usize) -> Self {
        let len = Self::len_for(radius);
        Self {
            radius,
            weights: vec![1.0 / len as f64; len],
        }
    }

    pub const fn radius(&self) -> usize {
        self.radius
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weighted sum of a neighborhood, position by position
    pub fn activation(&self, neighborhood: &[Cell]) -> f64 {
        debug_assert_eq!(neighborhood.len(), self.weights.len());
        self.weights
            .iter()
            .zip(neighborhood)
            .map(|(w, cell)| w * cell.value())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_kernel_is_normalized() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let kernel = Kernel::random(DEFAULT_RADIUS, &mut rng);
            assert_eq!(kernel.len(), 121);
            assert!(kernel.weights().iter().all(|&w| w >= 0.0));
            let sum: f64 = kernel.weights().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        }
    }

    #[test]
    fn test_random_kernels_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Kernel::random(DEFAULT_RADIUS, &mut rng);
        let b = Kernel::random(DEFAULT_RADIUS, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_weights_normalizes() {
        let kernel = Kernel::from_weights(1, vec![2.0; 9]).unwrap();
        assert!(kernel.weights().iter().all(|&w| (w - 1.0 / 9.0).abs() < 1e-12));
    }

    #[test]
    fn test_from_weights_rejects_bad_input() {
        assert_eq!(Kernel::from_weights(1, vec![]), Err(AutomatonError::UninitializedKernel));
        assert_eq!(
            Kernel::from_weights(1, vec![1.0; 8]),
            Err(AutomatonError::KernelSizeMismatch { radius: 1, expected: 9, got: 8 })
        );
        assert_eq!(Kernel::from_weights(1, vec![0.0; 9]), Err(AutomatonError::InvalidKernelWeights));

        let mut negative = vec![1.0; 9];
        negative[4] = -0.5;
        assert_eq!(Kernel::from_weights(1, negative), Err(AutomatonError::InvalidKernelWeights));

        let mut nan = vec![1.0; 9];
        nan[0] = f64::NAN;
        assert_eq!(Kernel::from_weights(1, nan), Err(AutomatonError::InvalidKernelWeights));
    }

    #[test]
    fn test_activation_is_positional() {
        let mut weights = vec![0.0; 9];
        weights[0] = 3.0;
        weights[8] = 1.0;
        let kernel = Kernel::from_weights(1, weights).unwrap();

        let mut first = vec![Cell::Dead; 9];
        first[0] = Cell::Alive;
        assert!((kernel.activation(&first) - 0.75).abs() < 1e-12);

        let mut last = vec![Cell::Dead; 9];
        last[8] = Cell::Alive;
        assert!((kernel.activation(&last) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_activation_is_density() {
        let kernel = Kernel::uniform(1);
        let mut cells = vec![Cell::Dead; 9];
        cells[..3].fill(Cell::Alive);
        assert!((kernel.activation(&cells) - 3.0 / 9.0).abs() < 1e-12);
    }
}
