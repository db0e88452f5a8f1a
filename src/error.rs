//! Error types for the quiz session.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can end or interrupt a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("input closed")]
    InputClosed,

    /// The leaderboard could not be written back to disk.
    #[error("failed to save high scores to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The leaderboard could not be encoded as JSON.
    #[error("failed to encode high scores: {0}")]
    Serialize(#[from] serde_json::Error),
}
