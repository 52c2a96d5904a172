//! Error type for the fallible edges of the game
//!
//! The simulation itself never fails; only loading and saving external
//! files (settings, string tables, level packs, high scores) can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing game data
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A file did not contain the JSON we expected
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    /// A level definition cannot be played
    #[error("level {index} is invalid: {reason}")]
    InvalidLevel { index: usize, reason: String },
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Read a whole file to a string, tagging failures with the path
pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
