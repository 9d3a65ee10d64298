//! Word lists for dictionary checks
//!
//! Loads newline-delimited dictionaries from disk.

pub mod loader;

pub use loader::{Dictionary, contains_word};
