//! Word tracing command
//!
//! Checks a word against the dictionary and, if it is a real word, tries to
//! trace it on the board.

use super::error::TraceError;
use crate::core::{Board, Tile};
use crate::solver::{SearchMode, SearchOutcome, Searcher};
use crate::wordlists::contains_word;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for tracing a word
pub struct TraceConfig {
    pub word: String,
    pub board_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub mode: SearchMode,
}

impl TraceConfig {
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        board_path: impl Into<PathBuf>,
        dictionary_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            word: word.into(),
            board_path: board_path.into(),
            dictionary_path: dictionary_path.into(),
            mode: SearchMode::default(),
        }
    }
}

/// What happened to the word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// Not a dictionary word; the board was never searched
    NotInDictionary,
    /// Traced; `board` has the consumed tiles marked
    Found {
        board: Board,
        start: Tile,
        path: Vec<Tile>,
    },
    /// Every starting tile got stuck
    Exhausted { attempts: usize },
}

/// Result of tracing a word
pub struct TraceResult {
    pub word: String,
    pub outcome: TraceOutcome,
}

impl TraceResult {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Found { .. })
    }
}

/// Read and decode a board file
///
/// # Errors
///
/// Returns `TraceError::Io` if the file cannot be read and
/// `TraceError::Board` if it does not hold a valid board.
pub fn load_board(path: &Path) -> Result<Board, TraceError> {
    let encoded = fs::read_to_string(path).map_err(|e| TraceError::io("board", path, e))?;
    Ok(Board::parse(&encoded)?)
}

/// Trace a word described by `config`
///
/// The dictionary is consulted first with the lowercase word. Only dictionary
/// words get a board search.
///
/// # Errors
///
/// Returns an error if:
/// - The dictionary or board file cannot be read
/// - The board file is not a valid 16-tile encoding
pub fn trace_word(config: &TraceConfig) -> Result<TraceResult, TraceError> {
    let lowercase = config.word.to_lowercase();
    let known = contains_word(&config.dictionary_path, &lowercase)
        .map_err(|e| TraceError::io("dictionary", &config.dictionary_path, e))?;

    if !known {
        info!(word = %config.word, "word not in dictionary, skipping search");
        return Ok(TraceResult {
            word: config.word.clone(),
            outcome: TraceOutcome::NotInDictionary,
        });
    }

    let board = load_board(&config.board_path)?;
    let outcome = match Searcher::new(&board, config.mode).find(&config.word) {
        SearchOutcome::Found { start, board, path } => {
            info!(word = %config.word, %start, "word traced");
            TraceOutcome::Found { board, start, path }
        }
        SearchOutcome::Exhausted { attempts } => {
            info!(word = %config.word, attempts, "no starting tile traced the word");
            TraceOutcome::Exhausted { attempts }
        }
    };

    Ok(TraceResult {
        word: config.word.clone(),
        outcome,
    })
}
