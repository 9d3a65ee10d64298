//! Starting tile discovery

use crate::core::{Board, Frontier};

/// Every tile that could begin a word starting with `first`
///
/// Scans the board row-major and keeps letter tiles equal to `first` (in
/// uppercase) and wildcard tiles, in scan order. The board is not modified.
///
/// # Examples
/// ```
/// use boggle_trace::core::{Board, Cell, Tile};
/// use boggle_trace::solver::starting_tiles;
///
/// let board = Board::parse("T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D").unwrap();
/// let starts = starting_tiles(&board, 'P');
/// assert_eq!(starts[0], Tile::new(0, 2, Cell::Letter('P')));
/// assert_eq!(starts.len(), 3); // P plus two wildcards
/// ```
#[must_use]
pub fn starting_tiles(board: &Board, first: char) -> Frontier {
    board
        .tiles()
        .filter(|tile| tile.cell().matches(first))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Tile};

    fn sample_board() -> Board {
        Board::parse("T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D").unwrap()
    }

    #[test]
    fn letters_and_wildcards_in_scan_order() {
        let board = sample_board();

        assert_eq!(
            starting_tiles(&board, 'A'),
            vec![
                Tile::new(0, 1, Cell::Letter('A')),
                Tile::new(0, 3, Cell::Wildcard),
                Tile::new(1, 1, Cell::Letter('A')),
                Tile::new(3, 1, Cell::Wildcard),
            ]
        );
    }

    #[test]
    fn repeated_calls_do_not_mutate() {
        let board = sample_board();
        let before = board.clone();

        let first = starting_tiles(&board, 'A');
        let second = starting_tiles(&board, 'A');

        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn lowercase_letter_is_normalized() {
        let board = sample_board();
        assert_eq!(starting_tiles(&board, 's'), starting_tiles(&board, 'S'));
    }

    #[test]
    fn absent_letter_yields_only_wildcards() {
        let board = sample_board();
        assert_eq!(
            starting_tiles(&board, 'G'),
            vec![Tile::new(0, 3, Cell::Wildcard), Tile::new(3, 1, Cell::Wildcard)]
        );
    }

    #[test]
    fn visited_tiles_are_not_starts() {
        let mut board = sample_board();
        board.mark_visited(0, 3);
        board.mark_visited(3, 1);
        assert!(starting_tiles(&board, 'G').is_empty());
    }
}
