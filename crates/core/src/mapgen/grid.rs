//! The cave grid: a fixed-size, row-major buffer of binary cell states.

use crate::types::Cell;

/// A `width x height` grid of [`Cell`]s addressed by `(x, y)` with
/// `0 <= x < width` and `0 <= y < height`. `(0, 0)` is one corner;
/// increasing `x` and `y` move toward the opposite corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CaveGrid {
    /// A grid with every cell set to `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || x == self.width - 1 || y == 0 || y == self.height - 1
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_wall()).count()
    }

    /// Stable byte encoding of the grid, suitable for fingerprinting and
    /// byte-identical comparison across runs.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Empty => 0,
                Cell::Wall => 1,
            });
        }
        bytes
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cell_round_trips_through_cell_at() {
        let mut grid = CaveGrid::filled(4, 3, Cell::Empty);
        grid.set_cell(2, 1, Cell::Wall);

        assert_eq!(grid.cell_at(2, 1), Cell::Wall);
        assert_eq!(grid.cell_at(1, 2), Cell::Empty);
        assert_eq!(grid.wall_count(), 1);
    }

    #[test]
    fn border_predicate_covers_all_four_edges() {
        let grid = CaveGrid::filled(5, 4, Cell::Empty);

        assert!(grid.is_border(0, 2));
        assert!(grid.is_border(4, 1));
        assert!(grid.is_border(3, 0));
        assert!(grid.is_border(2, 3));
        assert!(!grid.is_border(2, 2));
    }

    #[test]
    fn single_row_grid_treats_every_cell_as_border() {
        let grid = CaveGrid::filled(3, 1, Cell::Empty);
        for x in 0..3 {
            assert!(grid.is_border(x, 0));
        }
    }

    #[test]
    fn canonical_bytes_starts_with_dimensions_then_row_major_cells() {
        let mut grid = CaveGrid::filled(3, 2, Cell::Empty);
        grid.set_cell(1, 0, Cell::Wall);
        grid.set_cell(0, 1, Cell::Wall);

        let bytes = grid.canonical_bytes();
        assert_eq!(&bytes[0..4], &3_u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &2_u32.to_le_bytes());
        assert_eq!(&bytes[8..], &[0, 1, 0, 1, 0, 0]);
    }
}
