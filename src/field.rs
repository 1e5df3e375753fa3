use std::fmt;

use crate::{Cell, GridError};

/// Fixed-size Game of Life field with its edges stitched into a torus.
///
/// Cells are stored row-major in a flat buffer (`index = row * width + col`).
/// [`tick`](Self::tick) writes the next generation into a second buffer and
/// swaps the two, so a pass never reads a half-updated grid. All initial
/// state enters through the constructors; after that only `tick` mutates
/// the field.
#[derive(Clone, Debug)]
pub struct TorusField {
    width: usize,
    height: usize,
    generation: u64,
    cells_curr: Vec<Cell>,
    cells_next: Vec<Cell>,
}

impl TorusField {
    /// Creates a field seeded with the default deterministic pattern:
    /// the cell at flat index `i` starts alive iff `i % 2 == 0 || i % 7 == 0`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let mut field = Self::blank(width, height)?;
        for (i, cell) in field.cells_curr.iter_mut().enumerate() {
            if i % 2 == 0 || i % 7 == 0 {
                *cell = Cell::Alive;
            }
        }
        Ok(field)
    }

    /// Creates a field filled with dead cells.
    pub fn blank(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let size = width * height;
        Ok(Self {
            width,
            height,
            generation: 0,
            cells_curr: vec![Cell::Dead; size],
            cells_next: vec![Cell::Dead; size],
        })
    }

    /// Creates a field from an explicit row-major cell buffer.
    pub fn with_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let mut field = Self::blank(width, height)?;
        if cells.len() != width * height {
            return Err(GridError::CellCountMismatch {
                expected: width * height,
                got: cells.len(),
            });
        }
        field.cells_curr = cells;
        Ok(field)
    }

    /// Creates a blank field with the listed `(row, col)` cells set alive.
    pub fn with_alive_cells(
        width: usize,
        height: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut field = Self::blank(width, height)?;
        for &(row, col) in alive {
            let idx = field.checked_index(row, col)?;
            field.cells_curr[idx] = Cell::Alive;
        }
        Ok(field)
    }

    /// Creates a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        width: usize,
        height: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, GridError> {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut field = Self::blank(width, height)?;
        for cell in field.cells_curr.iter_mut() {
            if rng.gen_bool(fill_rate) {
                *cell = Cell::Alive;
            }
        }
        Ok(field)
    }

    /// Parses an RLE pattern into a field of the pattern's dimensions.
    pub fn from_rle(data: &[u8]) -> Result<Self, GridError> {
        let rle = crate::parse_rle(data)?;
        Self::with_cells(rle.width, rle.height, rle.cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|c| c.is_alive()).count()
    }

    /// Current generation as a row-major slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells_curr
    }

    /// Cell state at (`row`, `col`).
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        Ok(self.cells_curr[self.checked_index(row, col)?])
    }

    /// Advances the field by one generation.
    ///
    /// Every next state is computed from the current buffer before any
    /// write becomes visible; the buffers are swapped at the end, so the
    /// caller never observes a mixed-generation grid.
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let neighbors = self.count_neighbors(row, col);
                let idx = row * self.width + col;
                let next = if self.cells_curr[idx].is_alive() {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
                self.cells_next[idx] = if next { Cell::Alive } else { Cell::Dead };
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }

    /// Text snapshot of the current generation: `height` rows of `width`
    /// glyphs (`◼` alive, `◻` dead), each row ending in a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn count_neighbors(&self, row: usize, col: usize) -> usize {
        let r1 = if row == 0 { self.height - 1 } else { row - 1 };
        let r2 = if row == self.height - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { self.width - 1 } else { col - 1 };
        let c2 = if col == self.width - 1 { 0 } else { col + 1 };
        self.alive(r1, c1)
            + self.alive(r1, col)
            + self.alive(r1, c2)
            + self.alive(row, c1)
            + self.alive(row, c2)
            + self.alive(r2, c1)
            + self.alive(r2, col)
            + self.alive(r2, c2)
    }

    fn alive(&self, row: usize, col: usize) -> usize {
        self.cells_curr[row * self.width + col].is_alive() as usize
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }
}

impl fmt::Display for TorusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells_curr.chunks(self.width) {
            for &cell in line {
                let glyph = if cell.is_alive() { '◼' } else { '◻' };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn blank_allocates_width_times_height() {
        let field = TorusField::blank(16, 20).unwrap();
        assert_eq!(field.cells().len(), 320);
        assert_eq!(field.population(), 0);
    }

    #[test]
    fn default_seed_follows_documented_rule() {
        let field = TorusField::new(8, 8).unwrap();
        for (i, cell) in field.cells().iter().enumerate() {
            assert_eq!(cell.is_alive(), i % 2 == 0 || i % 7 == 0, "index {}", i);
        }
    }

    #[test]
    fn neighbors_wrap_on_every_edge() {
        // one live cell in each corner: on a torus the corners are all
        // mutually adjacent
        let field =
            TorusField::with_alive_cells(4, 4, &[(0, 0), (0, 3), (3, 0), (3, 3)]).unwrap();
        assert_eq!(field.count_neighbors(0, 0), 3);
        assert_eq!(field.count_neighbors(3, 3), 3);
        assert_eq!(field.count_neighbors(1, 1), 1);
        assert_eq!(field.count_neighbors(2, 2), 1);
    }

    #[test]
    fn neighbors_exclude_self() {
        let field = TorusField::with_alive_cells(5, 5, &[(2, 2)]).unwrap();
        assert_eq!(field.count_neighbors(2, 2), 0);
        assert_eq!(field.count_neighbors(2, 1), 1);
    }

    #[test]
    fn checked_index_rejects_out_of_bounds() {
        let field = TorusField::blank(3, 2).unwrap();
        assert_eq!(field.checked_index(1, 2), Ok(5));
        assert_eq!(
            field.checked_index(2, 0),
            Err(GridError::OutOfBounds {
                row: 2,
                col: 0,
                width: 3,
                height: 2,
            })
        );
    }

    #[test]
    fn generation_counts_ticks() {
        let mut field = TorusField::blank(4, 4).unwrap();
        assert_eq!(field.generation(), 0);
        field.tick();
        field.tick();
        field.tick();
        assert_eq!(field.generation(), 3);
    }
}
