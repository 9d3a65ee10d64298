//! Neighbor enumeration
//!
//! Finds the tiles adjacent to a given tile that can supply a target letter.

use crate::core::{BOARD_SIZE, Board, Frontier, Tile};

/// Tiles around `from` that can stand for `target`
///
/// Looks at the eight Chebyshev neighbors clipped to the board. A neighbor
/// qualifies if its live cell is a wildcard or the target letter (compared in
/// uppercase); visited cells never qualify. An origin outside the board has
/// no neighbors.
///
/// Neighbors are listed row by row from top to bottom, left to right within
/// a row. The path selector commits to the first viable candidate, so this
/// order decides which path gets found.
///
/// # Examples
/// ```
/// use boggle_trace::core::{Board, Cell, Tile};
/// use boggle_trace::solver::selectable;
///
/// let board = Board::parse("T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D").unwrap();
/// let from = Tile::new(2, 2, Cell::Letter('R'));
///
/// let tiles = selectable(&board, &from, 'D');
/// assert_eq!(
///     tiles,
///     vec![Tile::new(3, 1, Cell::Wildcard), Tile::new(3, 3, Cell::Letter('D'))]
/// );
/// ```
#[must_use]
pub fn selectable(board: &Board, from: &Tile, target: char) -> Frontier {
    if board.cell(from.row(), from.col()).is_none() {
        return Frontier::new();
    }

    let rows = from.row().saturating_sub(1)..=from.row().saturating_add(1).min(BOARD_SIZE - 1);

    rows.flat_map(|row| {
        let cols = from.col().saturating_sub(1)..=from.col().saturating_add(1).min(BOARD_SIZE - 1);
        cols.map(move |col| (row, col))
    })
    .filter(|&(row, col)| (row, col) != (from.row(), from.col()))
    .filter_map(|(row, col)| board.tile(row, col))
    .filter(|tile| tile.cell().matches(target))
    .collect()
}
