//! # Status Indexer Repository
//!
//! This crate provides the document store boundary used by the status
//! indexer: the `DocumentStore` trait, its error type, a concrete OpenSearch
//! implementation, and `IndexClient`, which provisions the index and writes
//! documents through any store.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use client::IndexClient;
pub use config::StoreConfig;
pub use errors::StoreError;
pub use interfaces::DocumentStore;
pub use opensearch::OpenSearchClient;
pub use types::{CreateIndexOutcome, IndexProbe, UpsertReceipt};
