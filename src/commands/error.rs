//! Errors surfaced by commands

use crate::core::ValidationError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal failures while preparing a trace
///
/// A word missing from the dictionary or a word that cannot be traced is a
/// normal outcome, not an error.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("invalid board: {0}")]
    Board(#[from] ValidationError),

    #[error("failed to read {what} from {}: {source}", .path.display())]
    Io {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TraceError {
    pub(crate) fn io(what: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            what,
            path: path.to_path_buf(),
            source,
        }
    }
}
