//! Formatting utilities for terminal output

use crate::core::{BOARD_SIZE, Cell, Tile};

/// Format one board row as `[T A P *]`
#[must_use]
pub fn format_row(cells: &[Cell; BOARD_SIZE]) -> String {
    format_row_with(cells, |cell| cell.to_string())
}

/// Format one board row, rendering each cell with `style`
#[must_use]
pub fn format_row_with<F>(cells: &[Cell; BOARD_SIZE], style: F) -> String
where
    F: Fn(Cell) -> String,
{
    let symbols: Vec<String> = cells.iter().map(|&cell| style(cell)).collect();
    format!("[{}]", symbols.join(" "))
}

/// Format a traced path as `T(0,0) → A(1,1) → ...`
///
/// Each step shows the letter of `word` it supplied, so a wildcard step is
/// printed as the letter it stood in for.
#[must_use]
pub fn format_path(path: &[Tile], word: &str) -> String {
    path.iter()
        .zip(word.chars())
        .map(|(tile, letter)| {
            let shown = match tile.cell() {
                Cell::Wildcard => format!("*{}", letter.to_ascii_uppercase()),
                cell => cell.to_string(),
            };
            format!("{shown}({},{})", tile.row(), tile.col())
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Group words into lines of at most `per_line` entries
#[must_use]
pub fn columns(words: &[String], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|chunk| chunk.join("  "))
        .collect()
}
