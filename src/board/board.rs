//! 3x3 board backed by a fixed cell array

use super::{Cell, CELL_COUNT};

/// Game board with cells addressed by indices 1..=9, row-major from the
/// top-left corner.
///
/// The type is `Copy` since it is only 9 bytes, which lets callers probe
/// hypothetical moves on a stack copy instead of mutating and undoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Check that a cell index is within 1..=9
    #[inline]
    pub fn in_range(cell: usize) -> bool {
        (1..=CELL_COUNT).contains(&cell)
    }

    /// Get cell value at index (1..=9)
    #[inline]
    pub fn get(&self, cell: usize) -> Cell {
        debug_assert!(Self::in_range(cell));
        self.cells[cell - 1]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, cell: usize) -> bool {
        self.get(cell) == Cell::Empty
    }

    /// Place a value at a cell
    #[inline]
    pub fn place(&mut self, cell: usize, value: Cell) {
        debug_assert!(Self::in_range(cell));
        self.cells[cell - 1] = value;
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Clear every cell back to empty
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Indices of all empty cells, in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Copy of the raw cell array, ordered by index
    #[inline]
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
