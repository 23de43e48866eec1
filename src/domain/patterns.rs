/// A small live-cell configuration used to seed deterministic runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    /// Rows spanned
    pub length: usize,
    /// Columns spanned
    pub width: usize,
    /// `(row, column)` offsets of the live cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let length = cells.iter().map(|(x, _)| *x).max().map_or(0, |x| x + 1);
        let width = cells.iter().map(|(_, y)| *y).max().map_or(0, |y| y + 1);
        Self { name, length, width, cells }
    }
}

/// Classic B3/S23 patterns
pub mod presets {
    use super::Pattern;

    /// Still life
    pub fn block() -> Pattern {
        Pattern::new("block", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Period 2 oscillator, vertical phase
    pub fn blinker() -> Pattern {
        Pattern::new("blinker", vec![(0, 1), (1, 1), (2, 1)])
    }

    /// Period 4 spaceship moving one cell diagonally per cycle
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Methuselah; stabilizes after 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), glider(), r_pentomino()]
    }

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent() {
        let glider = presets::glider();
        assert_eq!((glider.length, glider.width), (3, 3));
        let blinker = presets::blinker();
        assert_eq!((blinker.length, blinker.width), (3, 2));
        assert_eq!(Pattern::new("empty", vec![]).length, 0);
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(presets::find("GLIDER"), Some(presets::glider()));
        assert!(presets::find("gosper").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
