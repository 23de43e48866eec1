//! The automaton: a lattice plus the rule that advances it.

use rand::Rng;
use tracing::{debug, trace};

use super::error::Result;
use super::rules::{Rule, UpdateRule};
use super::{Cell, Lattice};

/// Automaton owns the lattice state and the update rule.
///
/// Steps are synchronous: every cell of generation `n + 1` is computed from a
/// snapshot of generation `n`, so no transition observes a value written
/// earlier in the same step.
#[derive(Clone, Debug)]
pub struct Automaton {
    lattice: Lattice,
    rule: UpdateRule,
    generation: u64,
}

impl Automaton {
    /// Create an automaton over a zero-filled `length x width` lattice
    pub fn new(length: usize, width: usize, rule: impl Into<UpdateRule>) -> Result<Self> {
        let lattice = Lattice::new(length, width)?;
        Ok(Self::from_lattice(lattice, rule))
    }

    /// Wrap an existing lattice
    pub fn from_lattice(lattice: Lattice, rule: impl Into<UpdateRule>) -> Self {
        let rule = rule.into();
        let (length, width) = lattice.dimensions();
        debug!(length, width, rule = rule.name(), radius = rule.radius(), "created automaton");
        Self {
            lattice,
            rule,
            generation: 0,
        }
    }

    /// Game of Life automaton
    pub fn discrete(length: usize, width: usize) -> Result<Self> {
        Self::new(length, width, UpdateRule::discrete())
    }

    /// Convolution-threshold automaton with a kernel drawn from `rng`
    pub fn convolution<R: Rng + ?Sized>(length: usize, width: usize, rng: &mut R) -> Result<Self> {
        Self::new(length, width, UpdateRule::convolution(rng))
    }

    /// Re-randomize every cell using thread-local entropy
    pub fn initialize_random(&mut self) {
        self.initialize_random_with(&mut rand::rng());
    }

    /// Re-randomize every cell from the given generator
    pub fn initialize_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.lattice.randomize(rng);
        self.generation = 0;
        debug!(alive = self.lattice.alive_count(), "randomized lattice");
    }

    /// Advance one generation
    pub fn step(&mut self) {
        let snapshot = self.lattice.clone();
        let (length, width) = snapshot.dimensions();
        let radius = self.rule.radius();
        let center = self.rule.center();
        let mut neighborhood: Vec<Cell> = Vec::with_capacity(self.rule.neighborhood_len());

        for x in 0..length {
            for y in 0..width {
                neighborhood.clear();
                neighborhood.extend(snapshot.neighborhood(x, y, radius, center));
                let next = self.rule.evolve(snapshot.get(x, y), &neighborhood);
                self.lattice.set(x, y, next);
            }
        }

        self.generation += 1;
        trace!(generation = self.generation, alive = self.lattice.alive_count(), "step");
    }

    /// Read-only view of the current lattice
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Mutable access for seeding patterns before a run
    pub fn lattice_mut(&mut self) -> &mut Lattice {
        &mut self.lattice
    }

    pub fn rule(&self) -> &UpdateRule {
        &self.rule
    }

    /// Number of steps taken since construction or the last randomization
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConvolutionThresholdRule, Kernel, presets};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Automaton::discrete(0, 3).is_err());
        assert!(Automaton::discrete(3, 0).is_err());
    }

    #[test]
    fn test_step_before_initialization_is_all_dead() {
        let mut automaton = Automaton::discrete(5, 5).unwrap();
        for _ in 0..10 {
            automaton.step();
        }
        assert_eq!(automaton.lattice().alive_count(), 0);
        assert_eq!(automaton.generation(), 10);
    }

    #[test]
    fn test_convolution_on_dead_lattice_stays_dead() {
        // u = 0 is outside (0.2, 0.4)
        let mut rng = StdRng::seed_from_u64(5);
        let mut automaton = Automaton::convolution(12, 12, &mut rng).unwrap();
        automaton.step();
        assert_eq!(automaton.lattice().alive_count(), 0);
    }

    #[test]
    fn test_blinker_oscillates_synchronously() {
        // Updating in place would let the first row's result feed the next
        // rows and break the period-2 oscillation.
        let vertical = Lattice::from_rows(&[
            [0u8, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();
        let horizontal = Lattice::from_rows(&[
            [0u8, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();

        let mut automaton = Automaton::from_lattice(vertical.clone(), UpdateRule::discrete());
        automaton.step();
        assert_eq!(automaton.lattice(), &horizontal);
        automaton.step();
        assert_eq!(automaton.lattice(), &vertical);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut lattice = Lattice::new(6, 6).unwrap();
        lattice.place(&presets::block(), 2, 2);
        let mut automaton = Automaton::from_lattice(lattice.clone(), UpdateRule::discrete());
        automaton.step();
        assert_eq!(automaton.lattice(), &lattice);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        // A glider moves one cell diagonally every 4 generations, so after
        // 4 * 8 generations on an 8x8 torus it is back where it started.
        let mut lattice = Lattice::new(8, 8).unwrap();
        lattice.place(&presets::glider(), 0, 0);
        let mut automaton = Automaton::from_lattice(lattice.clone(), UpdateRule::discrete());
        for _ in 0..32 {
            automaton.step();
            assert_eq!(automaton.lattice().alive_count(), 5);
        }
        assert_eq!(automaton.lattice(), &lattice);
    }

    #[test]
    fn test_convolution_step_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut automaton = Automaton::convolution(16, 16, &mut rng).unwrap();
        automaton.initialize_random_with(&mut rng);

        let mut twin = automaton.clone();
        automaton.step();
        twin.step();
        assert_eq!(automaton.lattice(), twin.lattice());
        assert!(automaton.lattice().to_matrix().iter().flatten().all(|&v| v <= 1));
    }

    #[test]
    fn test_convolution_step_matches_direct_evaluation() {
        let mut rng = StdRng::seed_from_u64(21);
        let rule = ConvolutionThresholdRule::new(Kernel::random(2, &mut rng), 0.3, 0.6).unwrap();
        let mut automaton = Automaton::new(7, 9, rule.clone()).unwrap();
        automaton.initialize_random_with(&mut rng);

        let before = automaton.lattice().clone();
        automaton.step();
        for (x, y, cell) in automaton.lattice().iter_cells() {
            let neighborhood: Vec<Cell> =
                before.neighborhood(x, y, 2, crate::domain::Center::Include).collect();
            assert_eq!(cell, rule.classify(rule.kernel().activation(&neighborhood)));
        }
    }

    #[test]
    fn test_initialize_random_resets_generation() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut automaton = Automaton::discrete(10, 10).unwrap();
        automaton.step();
        automaton.initialize_random_with(&mut rng);
        assert_eq!(automaton.generation(), 0);
        assert_eq!(automaton.lattice().dimensions(), (10, 10));
    }
}
