/// Cell represents one site of the lattice.
/// Each cell is either Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric value of the cell, as used by the convolution rule
    pub const fn value(self) -> f64 {
        match self {
            Cell::Dead => 0.0,
            Cell::Alive => 1.0,
        }
    }

    /// Byte value of the cell (0 or 1) for dense matrix export
    pub const fn as_u8(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    pub const fn from_bool(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(Cell::Dead.value(), 0.0);
        assert_eq!(Cell::Alive.value(), 1.0);
        assert_eq!(Cell::Dead.as_u8(), 0);
        assert_eq!(Cell::Alive.as_u8(), 1);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Cell::from_bool(true), Cell::Alive);
        assert_eq!(Cell::from_bool(false), Cell::Dead);
        assert!(Cell::from_bool(true).is_alive());
    }
}
