//! # Status Indexer
//!
//! Sensu handler that writes the latest status of every (client, check) pair
//! into a search index, for dashboards and contextual alerts.
//!
//! This crate provides the configuration, dependency wiring and exit-code
//! policy around the status indexer pipeline.

pub mod config;

pub use config::{load_environment, Dependencies, Settings};

use status_indexer_pipeline::PipelineError;
use status_indexer_repository::StoreError;
use thiserror::Error;

/// Errors that can occur while setting up or running the indexer.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] PipelineError),

    /// Store error raised while building the store client.
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// | code | meaning |
    /// |------|---------|
    /// | 1 | no input source, unreadable input, or an event that cannot be keyed |
    /// | 2 | unrecognized input category |
    /// | 3 | malformed payload |
    /// | 4 | store unreachable, index provisioning or write failed |
    /// | 5 | configuration error |
    pub fn exit_code(&self) -> u8 {
        match self {
            IndexingError::ConfigError(_) => 5,
            IndexingError::StoreError(_) => 4,
            IndexingError::PipelineError(e) => match e {
                PipelineError::NoInputSource | PipelineError::InputError(_) => 1,
                PipelineError::UnknownCategory(_) => 2,
                PipelineError::DecodeError(_) => 3,
                PipelineError::Store(_) => 4,
            },
        }
    }

    /// Whether the store could not be reached at all.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            IndexingError::StoreError(StoreError::ConnectionError(_))
                | IndexingError::PipelineError(PipelineError::Store(StoreError::ConnectionError(_)))
        )
    }
}
