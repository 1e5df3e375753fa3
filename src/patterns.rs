//! Canonical Life patterns, used as fixtures by the tests and the driver.

/// A named pattern as a list of live `(row, col)` cells anchored at the
/// top-left of its bounding box.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Cells translated by (`row_off`, `col_off`), ready for
    /// [`TorusField::with_alive_cells`](crate::TorusField::with_alive_cells).
    pub fn at(&self, row_off: usize, col_off: usize) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .map(|&(row, col)| (row + row_off, col + col_off))
            .collect()
    }
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Period-2 oscillator, horizontal in its starting phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

/// Period-2 oscillator of two blinking blocks.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

/// Moves one cell down-right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn at_translates_every_cell() {
        assert_eq!(BLINKER.at(2, 1), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn all_patterns_are_named() {
        assert!(PATTERNS.iter().all(|p| !p.name.is_empty()));
    }
}
