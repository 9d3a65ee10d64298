//! Search orchestration
//!
//! Runs one isolated attempt per starting tile and accepts the first one that
//! consumes the whole word.

use super::selector::{AttemptOutcome, PathSelector};
use super::starts::starting_tiles;
use crate::core::{Board, Tile};
use rayon::prelude::*;
use tracing::debug;

/// How attempts are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// One attempt at a time, stopping at the first success
    #[default]
    Sequential,
    /// One rayon task per starting tile; the earliest start in scan order wins
    Parallel,
}

impl SearchMode {
    /// Create a search mode from its name
    ///
    /// Supported names: "sequential", "parallel"
    /// Defaults to sequential if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "parallel" | "par" => Self::Parallel,
            _ => Self::Sequential,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

/// Result of searching a board for a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The word was traced; `board` shows the consumed tiles
    Found {
        start: Tile,
        board: Board,
        path: Vec<Tile>,
    },
    /// No starting tile led to a full trace
    Exhausted { attempts: usize },
}

impl SearchOutcome {
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Traces words on a template board
///
/// The template is never modified; every attempt clones it first.
pub struct Searcher<'a> {
    template: &'a Board,
    mode: SearchMode,
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub const fn new(template: &'a Board, mode: SearchMode) -> Self {
        Self { template, mode }
    }

    /// Run a single attempt seeded with `start`
    #[must_use]
    pub fn attempt(&self, start: Tile, word: &str) -> AttemptOutcome {
        let outcome = PathSelector::new(self.template.clone(), vec![start], word).run();
        debug!(
            %start,
            state = ?outcome.state,
            remaining = %outcome.remaining,
            "attempt finished"
        );
        outcome
    }

    /// Search for `word`, trying each starting tile in scan order
    ///
    /// The word is upper-cased first. An empty word has no starting tiles and
    /// is never found.
    ///
    /// # Examples
    /// ```
    /// use boggle_trace::core::Board;
    /// use boggle_trace::solver::{SearchMode, Searcher};
    ///
    /// let board = Board::parse("T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D").unwrap();
    /// let searcher = Searcher::new(&board, SearchMode::Sequential);
    ///
    /// assert!(searcher.find("tars").is_found());
    /// assert!(!searcher.find("zzzzz").is_found());
    /// ```
    #[must_use]
    pub fn find(&self, word: &str) -> SearchOutcome {
        let word = word.to_uppercase();
        let Some(first) = word.chars().next() else {
            return SearchOutcome::Exhausted { attempts: 0 };
        };
        let starts = starting_tiles(self.template, first);
        debug!(word = %word, starts = starts.len(), mode = self.mode.name(), "searching");

        let solved = match self.mode {
            SearchMode::Sequential => starts
                .iter()
                .map(|&start| (start, self.attempt(start, &word)))
                .find(|(_, outcome)| outcome.is_solved()),
            SearchMode::Parallel => starts
                .par_iter()
                .map(|&start| (start, self.attempt(start, &word)))
                .find_first(|(_, outcome)| outcome.is_solved()),
        };

        match solved {
            Some((start, outcome)) => SearchOutcome::Found {
                start,
                board: outcome.board,
                path: outcome.path,
            },
            None => SearchOutcome::Exhausted {
                attempts: starts.len(),
            },
        }
    }
}
