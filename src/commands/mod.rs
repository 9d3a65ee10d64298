//! Command implementations

pub mod error;
pub mod scan;
pub mod trace;

pub use error::TraceError;
pub use scan::{ScanConfig, ScanStatistics, run_scan};
pub use trace::{TraceConfig, TraceOutcome, TraceResult, load_board, trace_word};
