//! Document store trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;
use crate::types::{CreateIndexOutcome, IndexProbe, UpsertReceipt};

/// Abstracts the underlying document store (OpenSearch, Elasticsearch, a test double).
///
/// Implementations are injected into `IndexClient`. All methods are single
/// requests with no retries.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Check whether `index` exists.
    ///
    /// Never fails: transport errors and unexpected responses are reported as
    /// `IndexProbe::ProbeFailed`.
    async fn index_exists(&self, index: &str) -> IndexProbe;

    /// Create `index` with the status mappings.
    ///
    /// # Returns
    ///
    /// * `Ok(CreateIndexOutcome::Created)` - The index was created
    /// * `Ok(CreateIndexOutcome::AlreadyExists)` - The index was already there
    /// * `Err(StoreError)` - If the store is unreachable or refused the request
    async fn create_index(&self, index: &str) -> Result<CreateIndexOutcome, StoreError>;

    /// Write `document` into `index`.
    ///
    /// With an `id`, any existing document under that id is replaced in full.
    /// Without one, the store assigns an id.
    ///
    /// # Arguments
    ///
    /// * `index` - Destination index
    /// * `doc_type` - Document category (`sensu`, `user`)
    /// * `id` - Document id, or `None` for a store-assigned id
    /// * `document` - Field map to persist
    async fn upsert(
        &self,
        index: &str,
        doc_type: &str,
        id: Option<&str>,
        document: &Value,
    ) -> Result<UpsertReceipt, StoreError>;
}
