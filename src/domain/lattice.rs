use rand::Rng;

use super::error::{AutomatonError, Result};
use super::{Cell, Pattern};

/// Whether the offset `(0, 0)` belongs to a neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Center {
    Include,
    Exclude,
}

/// Lattice is a dense `length x width` grid of cells on a torus.
/// Row `x` is in `[0, length)`, column `y` in `[0, width)`, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    length: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Create a new lattice with all cells dead
    pub fn new(length: usize, width: usize) -> Result<Self> {
        if length == 0 || width == 0 {
            return Err(AutomatonError::InvalidDimensions { length, width });
        }
        Ok(Self {
            length,
            width,
            cells: vec![Cell::Dead; length * width],
        })
    }

    /// Build a lattice from rows of 0/1 values. Any non-zero value is alive.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let length = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut lattice = Self::new(length, width)?;
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(AutomatonError::InvalidDimensions { length, width: row.len() });
            }
            for (y, &value) in row.iter().enumerate() {
                lattice.set(x, y, Cell::from_bool(value != 0));
            }
        }
        Ok(lattice)
    }

    /// Get lattice dimensions as `(length, width)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.length, self.width)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        x * self.width + y
    }

    /// Wrap an arbitrary signed coordinate onto the torus
    pub fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (
            x.rem_euclid(self.length as isize) as usize,
            y.rem_euclid(self.width as isize) as usize,
        )
    }

    /// Get cell at a position, wrapping out-of-range coordinates
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x % self.length, y % self.width)]
    }

    /// Get cell at a signed position, wrapping toroidally
    pub fn get_wrapped(&self, x: isize, y: isize) -> Cell {
        let (x, y) = self.wrap(x, y);
        self.cells[self.index(x, y)]
    }

    /// Set cell at a position, wrapping out-of-range coordinates
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x % self.length, y % self.width);
        self.cells[idx] = cell;
    }

    /// Values around `(x, y)` at every offset in `[-radius, radius]^2`.
    ///
    /// Outer loop over the row offset, inner over the column offset. Wrap is
    /// applied unconditionally, so on small lattices the same site (even the
    /// center) can appear more than once.
    pub fn neighborhood(
        &self,
        x: usize,
        y: usize,
        radius: usize,
        center: Center,
    ) -> impl Iterator<Item = Cell> + '_ {
        let r = radius as isize;
        let (cx, cy) = (x as isize, y as isize);
        (-r..=r)
            .flat_map(move |i| (-r..=r).map(move |j| (i, j)))
            .filter(move |&(i, j)| center == Center::Include || i != 0 || j != 0)
            .map(move |(i, j)| self.get_wrapped(cx + i, cy + j))
    }

    /// Count live neighbors in the Moore neighborhood (8 cells, toroidal)
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighborhood(x, y, 1, Center::Exclude)
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Fill every cell independently with Dead or Alive, each with probability 1/2
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_bool(rng.random_bool(0.5)));
    }

    /// Stamp a pattern with its origin at `(x, y)`, wrapping around edges
    pub fn place(&mut self, pattern: &Pattern, x: usize, y: usize) {
        for &(dx, dy) in &pattern.cells {
            self.set((x + dx) % self.length, (y + dy) % self.width, Cell::Alive);
        }
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// One row of the lattice
    pub fn row(&self, x: usize) -> &[Cell] {
        let start = self.index(x, 0);
        &self.cells[start..start + self.width]
    }

    /// Dense 0/1 matrix suitable for pixel-intensity mapping
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.as_u8()).collect())
            .collect()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }
}
