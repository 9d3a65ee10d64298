//! Boggle Trace
//!
//! Decides whether a word can be traced through a 4x4 Boggle board, moving
//! between 8-directionally adjacent tiles, never reusing a tile, with `*`
//! tiles standing in for any letter.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_trace::core::Board;
//! use boggle_trace::solver::{SearchMode, Searcher};
//!
//! let board = Board::parse("T, A, P, *, E, A, K, S, O, B, R, S, S, *, X, D").unwrap();
//! let searcher = Searcher::new(&board, SearchMode::Sequential);
//!
//! assert!(searcher.find("goat").is_found());
//! ```

// Core domain types
pub mod core;

// Tracing algorithms
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
