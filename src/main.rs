//! Boggle Trace - CLI
//!
//! Checks a word against a dictionary and traces it on a 4x4 Boggle board.
//! `BOGGLEBOARD_PATH` and `DICTIONARY_PATH` may also come from a `.env` file
//! in the working directory.

use anyhow::{Result, bail};
use boggle_trace::{
    commands::{ScanConfig, TraceConfig, run_scan, trace_word},
    output::{print_scan_statistics, print_trace_result},
    solver::SearchMode,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "boggle_trace",
    about = "Trace a word through a 4x4 Boggle board with wildcard tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The word to trace
    word: Option<String>,

    /// Board file: 16 comma-separated letters, `*` for wildcards
    #[arg(short, long, global = true, env = "BOGGLEBOARD_PATH", default_value = "board.txt")]
    board: PathBuf,

    /// Dictionary file: one lowercase word per line
    #[arg(short, long, global = true, env = "DICTIONARY_PATH", default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Attempt scheduling: sequential (default) or parallel
    #[arg(short, long, global = true, default_value = "sequential")]
    mode: String,

    /// Show the traced path and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace one word (same as passing the word directly)
    Trace {
        /// The word to trace, including words like `scan`
        word: String,
    },

    /// Trace every dictionary word and list the ones the board can produce
    Scan {
        /// Skip words shorter than this
        #[arg(long, default_value = "3")]
        min_length: usize,

        /// Limit number of words to check
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still win
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match (cli.command, cli.word) {
        (Some(Commands::Scan { min_length, limit }), _) => {
            run_scan_command(cli.board, cli.dictionary, min_length, limit)
        }
        (Some(Commands::Trace { word }), _) | (None, Some(word)) => run_trace_command(
            word,
            cli.board,
            cli.dictionary,
            SearchMode::from_name(&cli.mode),
            cli.verbose,
        ),
        (None, None) => bail!("no word given; pass a word to trace or use `scan`"),
    }
}

fn run_trace_command(
    word: String,
    board: PathBuf,
    dictionary: PathBuf,
    mode: SearchMode,
    verbose: bool,
) -> Result<()> {
    let mut config = TraceConfig::new(word, board, dictionary);
    config.mode = mode;

    let result = trace_word(&config)?;
    print_trace_result(&result, verbose);
    Ok(())
}

fn run_scan_command(
    board: PathBuf,
    dictionary: PathBuf,
    min_length: usize,
    limit: Option<usize>,
) -> Result<()> {
    let mut config = ScanConfig::new(board, dictionary);
    config.min_length = min_length;
    config.limit = limit;

    let stats = run_scan(&config)?;
    print_scan_statistics(&stats);
    Ok(())
}
