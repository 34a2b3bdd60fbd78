//! Error type shared by puzzle constructors and file loaders.
//!
//! The solver itself has no failure modes: an unsolvable puzzle is a normal
//! outcome reported through an empty path. Errors only arise while turning
//! external input (files, command-line arguments) into a configuration.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write report: {0}")]
    Json(#[from] serde_json::Error),
}

impl PuzzleError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        PuzzleError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
