//! Index client implementation.
//!
//! This module provides the client the pipeline writes through. It makes sure
//! the destination index exists and then writes one document keyed by its id.

use tracing::{debug, info, instrument, warn};

use crate::errors::StoreError;
use crate::interfaces::DocumentStore;
use crate::types::{CreateIndexOutcome, IndexProbe, UpsertReceipt};
use status_indexer_shared::IndexDocument;

/// Provisions the destination index and writes documents into it.
pub struct IndexClient {
    store: Box<dyn DocumentStore>,
}

impl IndexClient {
    /// Create a new IndexClient over the given store.
    pub fn new(store: Box<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Make sure `index` exists, creating it if needed.
    ///
    /// Anything other than a positive existence answer leads to a creation
    /// attempt. A creation that loses a race with another writer is not an
    /// error.
    #[instrument(skip(self))]
    pub async fn ensure_index(&self, index: &str) -> Result<(), StoreError> {
        match self.store.index_exists(index).await {
            IndexProbe::Exists => {
                debug!(index = %index, "Index exists");
                return Ok(());
            }
            IndexProbe::Absent => {
                info!(index = %index, "Index not found, creating it");
            }
            IndexProbe::ProbeFailed(reason) => {
                warn!(
                    index = %index,
                    reason = %reason,
                    "Index existence probe failed, attempting creation"
                );
            }
        }

        match self.store.create_index(index).await? {
            CreateIndexOutcome::Created => info!(index = %index, "Index created"),
            CreateIndexOutcome::AlreadyExists => {
                debug!(index = %index, "Index already exists, nothing to create")
            }
        }
        Ok(())
    }

    /// Write `document` into `index`, replacing any document with the same id.
    #[instrument(skip(self, document), fields(doc_type = %document.doc_type, doc_id = ?document.id))]
    pub async fn upsert(
        &self,
        index: &str,
        document: &IndexDocument,
    ) -> Result<UpsertReceipt, StoreError> {
        let body = document
            .to_json()
            .map_err(|e| StoreError::serialization(e.to_string()))?;

        let receipt = self
            .store
            .upsert(index, document.doc_type.as_str(), document.id.as_deref(), &body)
            .await?;

        debug!(
            index = %index,
            doc_id = %receipt.id,
            created = receipt.created,
            "Document written"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use status_indexer_shared::{StatusDocument, UserDocument};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// In-memory store that records every call.
    #[derive(Default)]
    struct MockStore {
        probe: Option<IndexProbe>,
        create_result: Option<Result<CreateIndexOutcome, StoreError>>,
        fail_upsert: bool,
        calls: Arc<Mutex<Vec<String>>>,
        documents: Arc<Mutex<HashMap<String, Value>>>,
    }

    impl MockStore {
        fn with_probe(probe: IndexProbe) -> Self {
            Self {
                probe: Some(probe),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl DocumentStore for MockStore {
        async fn index_exists(&self, index: &str) -> IndexProbe {
            self.calls.lock().await.push(format!("exists:{}", index));
            self.probe.clone().unwrap_or(IndexProbe::Exists)
        }

        async fn create_index(&self, index: &str) -> Result<CreateIndexOutcome, StoreError> {
            self.calls.lock().await.push(format!("create:{}", index));
            self.create_result
                .clone()
                .unwrap_or(Ok(CreateIndexOutcome::Created))
        }

        async fn upsert(
            &self,
            index: &str,
            doc_type: &str,
            id: Option<&str>,
            document: &Value,
        ) -> Result<UpsertReceipt, StoreError> {
            self.calls
                .lock()
                .await
                .push(format!("upsert:{}:{}", index, doc_type));
            if self.fail_upsert {
                return Err(StoreError::upsert("Mock failure"));
            }
            let mut documents = self.documents.lock().await;
            let id = id
                .map(str::to_string)
                .unwrap_or_else(|| format!("generated-{}", documents.len()));
            let created = documents.insert(id.clone(), document.clone()).is_none();
            Ok(UpsertReceipt { id, created })
        }
    }

    fn status_document(state: &str) -> IndexDocument {
        IndexDocument::status(
            "host1_disk",
            StatusDocument {
                monitored_instance: "host1".to_string(),
                sensu_client: "host1".to_string(),
                incident_timestamp: "2023-11-14T22:13:20Z".to_string(),
                check_name: "disk".to_string(),
                check_state: state.to_string(),
                sensu_env: "Prod".to_string(),
                tags: vec![],
                instance_address: "10.0.0.1".to_string(),
                check_state_duration: String::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_ensure_index_existing_skips_creation() {
        let store = MockStore::with_probe(IndexProbe::Exists);
        let calls = store.calls.clone();
        let client = IndexClient::new(Box::new(store));

        client.ensure_index("monitoring-status").await.unwrap();

        assert_eq!(*calls.lock().await, vec!["exists:monitoring-status"]);
    }

    #[tokio::test]
    async fn test_ensure_index_absent_creates() {
        let store = MockStore::with_probe(IndexProbe::Absent);
        let calls = store.calls.clone();
        let client = IndexClient::new(Box::new(store));

        client.ensure_index("monitoring-status").await.unwrap();

        assert_eq!(
            *calls.lock().await,
            vec!["exists:monitoring-status", "create:monitoring-status"]
        );
    }

    #[tokio::test]
    async fn test_ensure_index_probe_failure_attempts_creation() {
        let store = MockStore::with_probe(IndexProbe::ProbeFailed("timeout".to_string()));
        let calls = store.calls.clone();
        let client = IndexClient::new(Box::new(store));

        client.ensure_index("status").await.unwrap();

        assert_eq!(calls.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_ensure_index_already_exists_is_not_an_error() {
        let store = MockStore {
            probe: Some(IndexProbe::ProbeFailed("503".to_string())),
            create_result: Some(Ok(CreateIndexOutcome::AlreadyExists)),
            ..Default::default()
        };
        let client = IndexClient::new(Box::new(store));

        assert!(client.ensure_index("status").await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_index_creation_failure_is_fatal() {
        let store = MockStore {
            probe: Some(IndexProbe::Absent),
            create_result: Some(Err(StoreError::index_provision("forbidden"))),
            ..Default::default()
        };
        let client = IndexClient::new(Box::new(store));

        let result = client.ensure_index("status").await;
        assert!(matches!(result, Err(StoreError::IndexProvisionError(_))));
    }

    #[tokio::test]
    async fn test_upsert_same_id_replaces_document() {
        let store = MockStore::default();
        let documents = store.documents.clone();
        let client = IndexClient::new(Box::new(store));

        let first = client
            .upsert("status", &status_document("OK"))
            .await
            .unwrap();
        let second = client
            .upsert("status", &status_document("CRITICAL"))
            .await
            .unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(second.id, "host1_disk");

        let documents = documents.lock().await;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents["host1_disk"]["check_state"], "CRITICAL");
    }

    #[tokio::test]
    async fn test_upsert_passes_document_type() {
        let store = MockStore::default();
        let calls = store.calls.clone();
        let client = IndexClient::new(Box::new(store));

        let user = IndexDocument::user(UserDocument {
            product: "billing".to_string(),
            data: "deploy".to_string(),
            timestamp: "2023-11-14T22:13:20Z".to_string(),
        });
        let receipt = client.upsert("status", &user).await.unwrap();

        assert!(receipt.created);
        assert_eq!(*calls.lock().await, vec!["upsert:status:user"]);
    }

    #[tokio::test]
    async fn test_upsert_failure() {
        let store = MockStore {
            fail_upsert: true,
            ..Default::default()
        };
        let client = IndexClient::new(Box::new(store));

        let result = client.upsert("status", &status_document("OK")).await;
        assert!(matches!(result, Err(StoreError::UpsertError(_))));
    }
}
