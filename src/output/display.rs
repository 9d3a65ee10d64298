//! Display functions for command results

use super::formatters::{columns, format_path, format_row, format_row_with};
use crate::commands::{ScanStatistics, TraceOutcome, TraceResult};
use crate::core::Cell;
use colored::Colorize;

const SUCCESS_BANNER: &str = "(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧ BOGGLE ✧ﾟ･: *ヽ(◕ヮ◕ヽ)";
const FAILURE_BANNER: &str = "(╯°□°）╯︵ ┻━┻ NO BOGGLE";

/// Print the result of tracing a word
pub fn print_trace_result(result: &TraceResult, verbose: bool) {
    match &result.outcome {
        TraceOutcome::NotInDictionary => {
            println!(
                "{} is not a valid word in the dictionary, can't play boggle",
                result.word.bright_yellow()
            );
        }
        TraceOutcome::Found { board, path, .. } => {
            println!("{}", SUCCESS_BANNER.green().bold());
            for row in board.rows() {
                println!("{}", format_row_with(row, styled_cell));
            }
            if verbose {
                println!("\n  Path: {}", format_path(path, &result.word));
            }
        }
        TraceOutcome::Exhausted { attempts } => {
            println!("{}", FAILURE_BANNER.red().bold());
            if verbose {
                println!("  Starting tiles tried: {attempts}");
            }
        }
    }
}

fn styled_cell(cell: Cell) -> String {
    match cell {
        Cell::Visited => cell.to_string().bright_green().bold().to_string(),
        Cell::Wildcard => cell.to_string().bright_black().to_string(),
        Cell::Letter(_) => cell.to_string(),
    }
}

/// Print scan statistics
pub fn print_scan_statistics(stats: &ScanStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD SCAN".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!();
    for row in stats.board.rows() {
        println!("   {}", format_row(row));
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Dictionary words: {}", stats.dictionary_size);
    println!("   Words checked:    {}", stats.checked);
    println!(
        "   Words traced:     {}",
        format!("{}", stats.found.len()).bright_yellow().bold()
    );
    if let Some(longest) = stats.longest() {
        println!("   Longest:          {}", longest.to_uppercase().green());
    }
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if !stats.found.is_empty() {
        println!("\n📝 {}", "Traced words:".bright_cyan().bold());
        for line in columns(&stats.found, 8) {
            println!("   {line}");
        }
    }
}
