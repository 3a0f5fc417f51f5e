//! OpenSearch implementation of the document store.
//!
//! This module provides a concrete implementation of `DocumentStore` using
//! OpenSearch (or a wire-compatible Elasticsearch) as the backend.

mod client;
mod index_config;

pub use client::OpenSearchClient;
pub use index_config::{get_index_settings, DEFAULT_INDEX_NAME};
