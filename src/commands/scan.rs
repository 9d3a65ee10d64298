//! Board scan - trace every dictionary word
//!
//! Runs the word search for each dictionary entry and reports which ones the
//! board can produce.

use super::error::TraceError;
use super::trace::load_board;
use crate::core::Board;
use crate::solver::{SearchMode, Searcher};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for scanning a board
pub struct ScanConfig {
    pub board_path: PathBuf,
    pub dictionary_path: PathBuf,
    /// Shortest word worth tracing
    pub min_length: usize,
    /// Only trace this many eligible words
    pub limit: Option<usize>,
}

impl ScanConfig {
    #[must_use]
    pub fn new(board_path: impl Into<PathBuf>, dictionary_path: impl Into<PathBuf>) -> Self {
        Self {
            board_path: board_path.into(),
            dictionary_path: dictionary_path.into(),
            min_length: 3,
            limit: None,
        }
    }
}

/// Statistics from scanning a board
#[derive(Debug)]
pub struct ScanStatistics {
    pub board: Board,
    pub dictionary_size: usize,
    pub checked: usize,
    /// Traceable words, sorted
    pub found: Vec<String>,
    pub duration: Duration,
}

impl ScanStatistics {
    /// Longest traceable word, first alphabetically on ties
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.found
            .iter()
            .max_by(|a, b| a.chars().count().cmp(&b.chars().count()).then(b.cmp(a)))
            .map(String::as_str)
    }
}

/// Dictionary words that qualify for a scan, in sorted order
#[must_use]
pub fn eligible_words(dictionary: &Dictionary, min_length: usize, limit: Option<usize>) -> Vec<&str> {
    dictionary
        .sorted_words()
        .into_iter()
        .filter(|word| word.chars().count() >= min_length)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Trace `words` on `board` in parallel, returning the ones found
///
/// Each word uses a sequential search; parallelism is across words. The
/// result keeps the input order.
#[must_use]
pub fn scan_words(board: &Board, words: &[&str], progress: &ProgressBar) -> Vec<String> {
    let searcher = Searcher::new(board, SearchMode::Sequential);

    words
        .par_iter()
        .filter(|word| {
            let found = searcher.find(word).is_found();
            progress.inc(1);
            found
        })
        .map(|word| (*word).to_string())
        .collect()
}

/// Load board and dictionary, then scan every eligible word
///
/// # Errors
///
/// Returns an error if either file cannot be read or the board is invalid.
pub fn run_scan(config: &ScanConfig) -> Result<ScanStatistics, TraceError> {
    let dictionary = Dictionary::load(&config.dictionary_path)
        .map_err(|e| TraceError::io("dictionary", &config.dictionary_path, e))?;
    let board = load_board(&config.board_path)?;

    let words = eligible_words(&dictionary, config.min_length, config.limit);
    info!(
        dictionary = dictionary.len(),
        eligible = words.len(),
        "scanning board"
    );

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let found = scan_words(&board, &words, &pb);
    pb.finish_with_message(format!("{} found", found.len()));

    Ok(ScanStatistics {
        board,
        dictionary_size: dictionary.len(),
        checked: words.len(),
        found,
        duration: start.elapsed(),
    })
}
