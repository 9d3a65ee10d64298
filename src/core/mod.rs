//! Core domain types for Boggle boards
//!
//! Cells, tile snapshots and the board itself. Everything here is pure data
//! with no knowledge of how words are traced.

mod board;
mod cell;
mod tile;

pub use board::{BOARD_SIZE, Board, TILE_COUNT, ValidationError};
pub use cell::Cell;
pub use tile::{Frontier, Tile};
