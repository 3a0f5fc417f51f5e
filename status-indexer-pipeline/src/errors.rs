//! Error types for the status indexer pipeline.

use status_indexer_repository::StoreError;
use thiserror::Error;

/// Errors that can occur in the status indexer pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Neither stdin nor an input file was selected.
    #[error("No input source: please enter a file to read from")]
    NoInputSource,

    /// The input could not be read, or the event cannot be indexed safely.
    #[error("Input error: {0}")]
    InputError(String),

    /// The payload is not valid JSON or lacks required structure.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The input category is not one the pipeline knows.
    #[error("Unrecognized input category: {0}")]
    UnknownCategory(String),

    /// Error from the document store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl PipelineError {
    /// Create an input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::InputError(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }
}
