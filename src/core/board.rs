//! The 4x4 Boggle board
//!
//! A board is decoded once from its comma-separated encoding and then used as a
//! read-only template. Each search attempt works on its own clone, and marking
//! tiles as visited is only possible from inside the crate.

use super::{Cell, Tile};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of rows and columns
pub const BOARD_SIZE: usize = 4;

/// Total number of tiles on a board
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Error raised when the board encoding cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid number of board elements: expected 16, got {0}")]
    TileCount(usize),
    #[error("invalid board element {token:?} at position {index}")]
    InvalidToken { index: usize, token: String },
}

/// A 4x4 grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Decode a board from 16 comma-separated tokens, filled row-major
    ///
    /// Each token is trimmed; `*` is a wildcard and any other single ASCII
    /// letter becomes an uppercase letter tile.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - There are not exactly 16 tokens
    /// - A token is empty, longer than one character, or not a letter
    ///
    /// # Examples
    /// ```
    /// use boggle_trace::core::{Board, Cell};
    ///
    /// let board = Board::parse("T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D").unwrap();
    /// assert_eq!(board.cell(0, 3), Some(Cell::Wildcard));
    /// assert_eq!(board.cell(3, 3), Some(Cell::Letter('D')));
    ///
    /// assert!(Board::parse("T, A, P").is_err());
    /// ```
    pub fn parse(encoded: &str) -> Result<Self, ValidationError> {
        let tokens: Vec<&str> = encoded.split(',').map(str::trim).collect();
        if tokens.len() != TILE_COUNT {
            return Err(ValidationError::TileCount(tokens.len()));
        }

        let mut grid = [[Cell::Visited; BOARD_SIZE]; BOARD_SIZE];
        for (index, token) in tokens.into_iter().enumerate() {
            grid[index / BOARD_SIZE][index % BOARD_SIZE] = parse_token(index, token)?;
        }

        Ok(Self { grid })
    }

    /// Read the cell at a position, or `None` if it is off the board
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Snapshot the position as a tile
    #[inline]
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.cell(row, col).map(|cell| Tile::new(row, col, cell))
    }

    /// All rows, top to bottom
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Every tile in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| Tile::new(row, col, cell))
        })
    }

    /// Number of tiles consumed so far
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.tiles().filter(|tile| tile.cell().is_visited()).count()
    }

    /// Mark a position as consumed; off-board positions are ignored
    pub(crate) fn mark_visited(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.grid.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *cell = Cell::Visited;
        }
    }
}

fn parse_token(index: usize, token: &str) -> Result<Cell, ValidationError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(Cell::WILDCARD_TOKEN), None) => Ok(Cell::Wildcard),
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(Cell::letter(ch)),
        _ => Err(ValidationError::InvalidToken {
            index,
            token: token.to_string(),
        }),
    }
}

impl FromStr for Board {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cells) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = cells.iter().map(ToString::to_string).collect();
            write!(f, "[{}]", symbols.join(" "))?;
        }
        Ok(())
    }
}
