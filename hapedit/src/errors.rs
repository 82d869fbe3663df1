use thiserror::Error;

use hapedit_core::AlphabetError;

/// A constructor invariant was violated; no edit value was created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEditError {
    #[error("edit position 0 is outside the reference sequence (positions are 1-based)")]
    ZeroPosition,

    #[error("deletion length must be at least 1")]
    ZeroLengthDeletion,

    #[error("insertion must carry at least one symbol")]
    EmptyInsertion,

    #[error("deletion from {start} to {stop} would have non-positive length")]
    InvertedRange { start: u64, stop: u64 },
}

/// A token could not be decoded into an edit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("unrecognized edit token: {0:?}")]
    UnrecognizedToken(String),

    #[error("edit token {token:?} contains a symbol outside the alphabet")]
    Symbol {
        token: String,
        #[source]
        source: AlphabetError,
    },

    #[error(transparent)]
    InvalidEdit(#[from] InvalidEditError),
}
