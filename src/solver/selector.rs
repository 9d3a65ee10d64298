//! Greedy path selection
//!
//! Consumes a word letter by letter against a frontier of candidate tiles.
//! Each pass commits to the first candidate that still has at least one
//! neighbor for the following letter, marks it visited, and moves on.
//!
//! The lookahead is a single step and commitments are never undone. A word
//! can therefore be reported as stuck even when a different choice earlier
//! on would have reached the end.

use super::adjacency::selectable;
use crate::core::{Board, Frontier, Tile};
use tracing::trace;

/// Where an attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Frontier and remaining word are both non-empty
    Searching,
    /// Every letter has been consumed
    Solved,
    /// No candidate could be committed; terminal
    Stuck,
}

impl SearchState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Searching)
    }
}

/// Final state of one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub board: Board,
    pub remaining: String,
    pub state: SearchState,
    /// Tiles committed, in word order
    pub path: Vec<Tile>,
}

impl AttemptOutcome {
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, SearchState::Solved)
    }
}

/// Step-by-step greedy search over a private board copy
#[derive(Debug, Clone)]
pub struct PathSelector {
    board: Board,
    frontier: Frontier,
    remaining: Vec<char>,
    path: Vec<Tile>,
    state: SearchState,
}

impl PathSelector {
    /// Create a selector that owns `board` and starts from `frontier`
    #[must_use]
    pub fn new(board: Board, frontier: Frontier, word: &str) -> Self {
        let remaining: Vec<char> = word.chars().collect();
        let state = if remaining.is_empty() {
            SearchState::Solved
        } else if frontier.is_empty() {
            SearchState::Stuck
        } else {
            SearchState::Searching
        };

        Self {
            board,
            frontier,
            remaining,
            path: Vec::new(),
            state,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn frontier(&self) -> &[Tile] {
        &self.frontier
    }

    /// Letters not yet consumed
    #[must_use]
    pub fn remaining(&self) -> String {
        self.remaining.iter().collect()
    }

    /// Run one scan of the frontier and return the new state
    ///
    /// Terminal states are returned unchanged.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some(&letter) = self.remaining.first() else {
            self.state = SearchState::Solved;
            return self.state;
        };
        let next = self.remaining.get(1).copied();

        let chosen = self
            .frontier
            .iter()
            .find_map(|tile| self.try_commit(tile, letter, next));

        self.state = match chosen {
            Some((tile, board, frontier)) => {
                trace!(%tile, letter = %letter, "committed tile");
                self.board = board;
                self.frontier = frontier;
                self.remaining.remove(0);
                self.path.push(tile);

                if self.remaining.is_empty() {
                    SearchState::Solved
                } else {
                    SearchState::Searching
                }
            }
            None => SearchState::Stuck,
        };

        self.state
    }

    /// Step until the state is terminal
    #[must_use]
    pub fn run(mut self) -> AttemptOutcome {
        while !self.step().is_terminal() {}

        AttemptOutcome {
            remaining: self.remaining(),
            board: self.board,
            state: self.state,
            path: self.path,
        }
    }

    /// Check a candidate against the live board and the required letter
    fn admits(&self, tile: &Tile, letter: char) -> bool {
        self.board.cell(tile.row(), tile.col()) == Some(tile.cell()) && tile.cell().matches(letter)
    }

    /// Speculatively consume `tile`, keeping it only if the next letter is reachable
    fn try_commit(
        &self,
        tile: &Tile,
        letter: char,
        next: Option<char>,
    ) -> Option<(Tile, Board, Frontier)> {
        if !self.admits(tile, letter) {
            return None;
        }

        let mut board = self.board.clone();
        board.mark_visited(tile.row(), tile.col());

        let frontier = match next {
            Some(next) => {
                let frontier = selectable(&board, tile, next);
                if frontier.is_empty() {
                    trace!(%tile, next = %next, "dead end");
                    return None;
                }
                frontier
            }
            None => Frontier::new(),
        };

        Some((*tile, board, frontier))
    }
}

/// Consume `word` starting from `frontier` on `board`
///
/// Returns the resulting board and the unconsumed suffix. An empty suffix
/// means the whole word was traced.
///
/// # Examples
/// ```
/// use boggle_trace::core::{Board, Cell, Tile};
/// use boggle_trace::solver::select;
///
/// let board = Board::parse("T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D").unwrap();
/// let (result, remaining) = select(board, vec![Tile::new(0, 0, Cell::Letter('T'))], "TARS");
///
/// assert!(remaining.is_empty());
/// assert_eq!(result.visited_count(), 4);
/// ```
#[must_use]
pub fn select(board: Board, frontier: Frontier, word: &str) -> (Board, String) {
    let outcome = PathSelector::new(board, frontier, word).run();
    (outcome.board, outcome.remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    const SAMPLE: &str = "T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D";

    fn sample_board() -> Board {
        Board::parse(SAMPLE).unwrap()
    }

    /// Parse a board written with `!` for visited cells
    fn board_with_marks(rows: [&str; 4]) -> Board {
        let mut board = Board::parse(&rows.join(",").replace('!', "Z")).unwrap();
        for (row, text) in rows.iter().enumerate() {
            for (col, token) in text.split(',').map(str::trim).enumerate() {
                if token == "!" {
                    board.mark_visited(row, col);
                }
            }
        }
        board
    }

    fn letter(row: usize, col: usize, ch: char) -> Tile {
        Tile::new(row, col, Cell::Letter(ch))
    }

    #[test]
    fn traces_word_from_exact_letter() {
        let (board, remaining) = select(sample_board(), vec![letter(0, 0, 'T')], "TARS");

        assert_eq!(remaining, "");
        assert_eq!(
            board,
            board_with_marks([
                "!, A, P, *",
                "E, !, K, !",
                "O, B, !, S",
                "S, *, X, D"
            ])
        );
    }

    #[test]
    fn traces_word_from_wildcard() {
        let start = Tile::new(3, 1, Cell::Wildcard);
        let (board, remaining) = select(sample_board(), vec![start], "GOAT");

        assert_eq!(remaining, "");
        assert_eq!(
            board,
            board_with_marks([
                "!, A, P, *",
                "E, !, K, S",
                "!, B, R, S",
                "S, !, X, D"
            ])
        );
    }

    #[test]
    fn greedy_choice_is_never_undone() {
        let (board, remaining) = select(sample_board(), vec![letter(0, 0, 'T')], "TAN");

        // Neither A has an N next to it, so only T gets consumed
        assert_eq!(remaining, "AN");
        assert_eq!(
            board,
            board_with_marks([
                "!, A, P, *",
                "E, A, K, S",
                "O, B, R, S",
                "S, *, X, D"
            ])
        );
    }

    #[test]
    fn committed_tile_is_kept_when_another_branch_would_finish() {
        let board = Board::parse("T,A,R,Q, E,A,Q,Q, Q,Q,R,S, Q,Q,Q,Q").unwrap();
        let (board, remaining) = select(board, vec![letter(0, 0, 'T')], "TARS");

        // A(0,1) commits because R(0,2) follows it, then R(0,2) has no S.
        // A(1,1) -> R(2,2) -> S(2,3) is never tried.
        assert_eq!(remaining, "RS");
        assert_eq!(
            board,
            board_with_marks([
                "!, !, R, Q",
                "E, A, Q, Q",
                "Q, Q, R, S",
                "Q, Q, Q, Q"
            ])
        );
        assert_eq!(board.visited_count(), 2);
    }

    #[test]
    fn stale_start_is_rejected() {
        let (board, remaining) = select(sample_board(), vec![letter(1, 1, 'T')], "TAPE");

        assert_eq!(remaining, "TAPE");
        assert_eq!(board, sample_board());
    }

    #[test]
    fn start_for_wrong_letter_is_rejected() {
        let (board, remaining) = select(sample_board(), vec![letter(0, 1, 'A')], "TAPE");

        assert_eq!(remaining, "TAPE");
        assert_eq!(board, sample_board());
    }

    #[test]
    fn off_board_start_is_rejected() {
        let (board, remaining) = select(sample_board(), vec![letter(5, 5, 'T')], "TAP");

        assert_eq!(remaining, "TAP");
        assert_eq!(board, sample_board());
    }

    #[test]
    fn empty_frontier_returns_inputs() {
        let (board, remaining) = select(sample_board(), Vec::new(), "TAP");

        assert_eq!(remaining, "TAP");
        assert_eq!(board, sample_board());
    }

    #[test]
    fn empty_word_is_already_solved() {
        let selector = PathSelector::new(sample_board(), vec![letter(0, 0, 'T')], "");
        assert_eq!(selector.state(), SearchState::Solved);

        let outcome = selector.run();
        assert!(outcome.is_solved());
        assert_eq!(outcome.board, sample_board());
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn single_letter_word_consumes_one_tile() {
        let (board, remaining) = select(sample_board(), vec![letter(0, 2, 'P')], "P");

        assert_eq!(remaining, "");
        assert_eq!(board.cell(0, 2), Some(Cell::Visited));
        assert_eq!(board.visited_count(), 1);
    }

    #[test]
    fn tile_cannot_be_reused() {
        // T-A-T would need (0,0) twice
        let (board, remaining) = select(sample_board(), vec![letter(0, 0, 'T')], "TAT");

        assert_eq!(remaining, "AT");
        assert_eq!(board.visited_count(), 1);
    }

    #[test]
    fn dead_end_candidate_is_skipped_for_later_one() {
        // From T both A tiles qualify; only (1,1) touches an R
        let mut selector = PathSelector::new(sample_board(), vec![letter(0, 0, 'T')], "TARS");

        assert_eq!(selector.step(), SearchState::Searching);
        assert_eq!(selector.frontier(), &[letter(0, 1, 'A'), letter(1, 1, 'A')]);

        assert_eq!(selector.step(), SearchState::Searching);
        assert_eq!(selector.board().cell(0, 1), Some(Cell::Letter('A')));
        assert_eq!(selector.board().cell(1, 1), Some(Cell::Visited));
        assert_eq!(selector.remaining(), "RS");
    }

    #[test]
    fn stuck_keeps_frontier() {
        let mut selector = PathSelector::new(sample_board(), vec![letter(0, 0, 'T')], "TAN");

        assert_eq!(selector.step(), SearchState::Searching);
        let frontier = selector.frontier().to_vec();

        assert_eq!(selector.step(), SearchState::Stuck);
        assert_eq!(selector.frontier(), frontier.as_slice());
        assert_eq!(selector.remaining(), "AN");

        // Terminal states do not move
        assert_eq!(selector.step(), SearchState::Stuck);
    }

    #[test]
    fn path_records_committed_tiles() {
        let outcome = PathSelector::new(sample_board(), vec![letter(0, 0, 'T')], "TARS").run();

        assert!(outcome.is_solved());
        assert_eq!(
            outcome.path,
            vec![
                letter(0, 0, 'T'),
                letter(1, 1, 'A'),
                letter(2, 2, 'R'),
                letter(1, 3, 'S'),
            ]
        );
    }

    #[test]
    fn lowercase_word_matches() {
        let (_, remaining) = select(sample_board(), vec![letter(0, 0, 'T')], "tars");
        assert_eq!(remaining, "");
    }

    #[test]
    fn template_board_is_untouched() {
        let template = sample_board();
        let _ = select(template.clone(), vec![letter(0, 0, 'T')], "TARS");
        assert_eq!(template, sample_board());
    }
}
