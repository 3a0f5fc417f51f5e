//! Error types for the status indexer repository.

mod store_error;

pub use store_error::StoreError;
