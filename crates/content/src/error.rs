use std::path::PathBuf;

use devpath_core::model::{BankError, GameKind, QuestionError};
use thiserror::Error;

/// Errors surfaced while locating or decoding question banks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("no question bank for {0}")]
    NotFound(GameKind),

    #[error("bank holds {found} questions, expected {expected}")]
    KindMismatch { expected: GameKind, found: GameKind },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question #{index} ({id}) is invalid: {source}")]
    Question {
        index: usize,
        id: String,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    Bank(#[from] BankError),
}
