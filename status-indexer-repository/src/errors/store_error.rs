//! Store error types.
//!
//! This module defines the errors that can occur while talking to the
//! document store.

use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be reached, or its address is invalid.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The destination index could not be created.
    #[error("Index provisioning error: {0}")]
    IndexProvisionError(String),

    /// The document write was rejected or failed.
    #[error("Upsert error: {0}")]
    UpsertError(String),

    /// The document could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index provisioning error.
    pub fn index_provision(msg: impl Into<String>) -> Self {
        Self::IndexProvisionError(msg.into())
    }

    /// Create an upsert error.
    pub fn upsert(msg: impl Into<String>) -> Self {
        Self::UpsertError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
