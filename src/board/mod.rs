//! Board representation for Tic-Tac-Toe

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Number of cells on the 3x3 board
pub const CELL_COUNT: usize = 9;

/// Index of the center cell (cells are addressed 1..=9, row-major)
pub const CENTER_CELL: usize = 5;

/// Cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    O,
    X,
}

impl Cell {
    /// Get the opposing value
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::O => Cell::X,
            Cell::X => Cell::O,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Character used in status text and logs
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Cell::O => 'O',
            Cell::X => 'X',
            Cell::Empty => ' ',
        }
    }
}
