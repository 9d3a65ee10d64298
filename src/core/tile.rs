//! Tile snapshots
//!
//! A tile records a board position together with the cell it held when it was
//! proposed as a candidate. It is not live state: the board may have moved on
//! since, so callers re-check it before acting on it.

use super::Cell;
use std::fmt;

/// A board position plus the cell value seen at selection time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    row: usize,
    col: usize,
    cell: Cell,
}

/// Ordered candidates for the next required letter
pub type Frontier = Vec<Tile>;

impl Tile {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize, cell: Cell) -> Self {
        Self { row, col, cell }
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Cell value recorded when the tile was proposed
    #[inline]
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_accessors() {
        let tile = Tile::new(2, 3, Cell::letter('s'));
        assert_eq!(tile.row(), 2);
        assert_eq!(tile.col(), 3);
        assert_eq!(tile.cell(), Cell::Letter('S'));
    }

    #[test]
    fn tile_display() {
        assert_eq!(Tile::new(3, 1, Cell::Wildcard).to_string(), "(3, 1, *)");
    }
}
