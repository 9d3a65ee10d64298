//! Board cell representation
//!
//! A cell is either a letter tile, a wildcard tile, or a tile already consumed
//! by the current attempt.

use std::fmt;

/// State of a single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An uppercase letter tile
    Letter(char),
    /// Matches any required letter
    Wildcard,
    /// Consumed in the current attempt; unusable until the attempt ends
    Visited,
}

impl Cell {
    /// Textual token for a wildcard tile in the board encoding
    pub const WILDCARD_TOKEN: char = '*';

    /// Marker printed for visited tiles
    pub const VISITED_MARKER: char = '!';

    /// Create a letter cell, normalizing to uppercase
    #[inline]
    #[must_use]
    pub const fn letter(ch: char) -> Self {
        Self::Letter(ch.to_ascii_uppercase())
    }

    /// Check whether this cell can stand for `letter`
    ///
    /// Wildcards match anything, visited cells match nothing, and letters
    /// compare case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use boggle_trace::core::Cell;
    ///
    /// assert!(Cell::letter('a').matches('A'));
    /// assert!(Cell::Wildcard.matches('q'));
    /// assert!(!Cell::Visited.matches('A'));
    /// ```
    #[inline]
    #[must_use]
    pub const fn matches(self, letter: char) -> bool {
        match self {
            Self::Letter(ch) => ch == letter.to_ascii_uppercase(),
            Self::Wildcard => true,
            Self::Visited => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_visited(self) -> bool {
        matches!(self, Self::Visited)
    }

    /// Character used when printing the cell
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Letter(ch) => ch,
            Self::Wildcard => Self::WILDCARD_TOKEN,
            Self::Visited => Self::VISITED_MARKER,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
