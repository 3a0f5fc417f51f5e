//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `DocumentStore` using
//! the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    IndexParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::interfaces::DocumentStore;
use crate::opensearch::index_config::get_index_settings;
use crate::types::{CreateIndexOutcome, IndexProbe, UpsertReceipt};

/// Error type OpenSearch reports when an index is created twice.
const ALREADY_EXISTS_ERROR: &str = "resource_already_exists_exception";

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::new("localhost", 9200);
/// let store = OpenSearchClient::new(&config)?;
/// let client = IndexClient::new(Box::new(store));
/// client.ensure_index("monitoring-status").await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the configured host and port.
    ///
    /// No request is made here; an unreachable store surfaces on first use.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(StoreError::ConnectionError)` - If the URL is invalid or the transport cannot be built
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let url = config.url()?;

        let conn_pool = SingleNodeConnectionPool::new(url.clone());
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch client");

        Ok(Self { client })
    }

    /// Whether a failed create-index response means the index is already there.
    fn is_already_exists(status: u16, body: &str) -> bool {
        status == 400 && body.contains(ALREADY_EXISTS_ERROR)
    }

    /// Map an index existence response status to a probe result.
    fn probe_from_status(status: u16) -> IndexProbe {
        match status {
            200 => IndexProbe::Exists,
            404 => IndexProbe::Absent,
            other => IndexProbe::ProbeFailed(format!("unexpected status {}", other)),
        }
    }

    /// Build the receipt from a possibly unreadable index response body.
    ///
    /// The write already succeeded, so an unreadable body is logged and the
    /// requested id is reported.
    fn receipt_from_response(
        body: Result<Value, String>,
        requested_id: Option<&str>,
    ) -> UpsertReceipt {
        match body {
            Ok(body) => Self::parse_receipt(&body, requested_id),
            Err(reason) => {
                warn!(
                    reason = %reason,
                    "Index response body unreadable, created flag unknown"
                );
                Self::parse_receipt(&Value::Null, requested_id)
            }
        }
    }

    /// Build the receipt from an index response body.
    fn parse_receipt(body: &Value, requested_id: Option<&str>) -> UpsertReceipt {
        let id = body["_id"]
            .as_str()
            .or(requested_id)
            .unwrap_or_default()
            .to_string();
        let created = body["result"].as_str() == Some("created");
        UpsertReceipt { id, created }
    }
}

#[async_trait]
impl DocumentStore for OpenSearchClient {
    async fn index_exists(&self, index: &str) -> IndexProbe {
        let response = match self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return IndexProbe::ProbeFailed(e.to_string()),
        };

        Self::probe_from_status(response.status_code().as_u16())
    }

    async fn create_index(&self, index: &str) -> Result<CreateIndexOutcome, StoreError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            return Ok(CreateIndexOutcome::Created);
        }

        let error_body = response.text().await.unwrap_or_default();
        if Self::is_already_exists(status.as_u16(), &error_body) {
            return Ok(CreateIndexOutcome::AlreadyExists);
        }

        error!(status = %status, body = %error_body, "Create index request failed");
        Err(StoreError::index_provision(format!(
            "Create index {} failed with status {}: {}",
            index, status, error_body
        )))
    }

    /// OpenSearch indices are typeless, so `doc_type` is only recorded in logs.
    async fn upsert(
        &self,
        index: &str,
        doc_type: &str,
        id: Option<&str>,
        document: &Value,
    ) -> Result<UpsertReceipt, StoreError> {
        let parts = match id {
            Some(id) => IndexParts::IndexId(index, id),
            None => IndexParts::Index(index),
        };

        let response = self
            .client
            .index(parts)
            .body(document.clone())
            .send()
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(StoreError::upsert(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response.json::<Value>().await.map_err(|e| e.to_string());
        let receipt = Self::receipt_from_response(body, id);

        debug!(doc_id = %receipt.id, doc_type = %doc_type, "Document indexed");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_invalid_host() {
        let config = StoreConfig::new("bad host", 9200);
        assert!(matches!(
            OpenSearchClient::new(&config),
            Err(StoreError::ConnectionError(_))
        ));
    }

    #[test]
    fn test_new_builds_without_contacting_store() {
        let config = StoreConfig::new("localhost", 9200);
        assert!(OpenSearchClient::new(&config).is_ok());
    }

    #[test]
    fn test_probe_from_status() {
        assert_eq!(OpenSearchClient::probe_from_status(200), IndexProbe::Exists);
        assert_eq!(OpenSearchClient::probe_from_status(404), IndexProbe::Absent);
        for status in [403, 500] {
            assert!(
                matches!(
                    OpenSearchClient::probe_from_status(status),
                    IndexProbe::ProbeFailed(ref reason) if reason.contains(&status.to_string())
                ),
                "status {}",
                status
            );
        }
    }

    #[test]
    fn test_is_already_exists() {
        let body = r#"{"error":{"type":"resource_already_exists_exception","reason":"index [monitoring-status/abc] already exists"},"status":400}"#;
        assert!(OpenSearchClient::is_already_exists(400, body));
        assert!(!OpenSearchClient::is_already_exists(403, body));
        assert!(!OpenSearchClient::is_already_exists(
            400,
            r#"{"error":{"type":"mapper_parsing_exception"}}"#
        ));
    }

    #[test]
    fn test_parse_receipt_created() {
        let body = json!({ "_index": "status", "_id": "host1_disk", "result": "created" });
        let receipt = OpenSearchClient::parse_receipt(&body, Some("host1_disk"));
        assert_eq!(receipt.id, "host1_disk");
        assert!(receipt.created);
    }

    #[test]
    fn test_parse_receipt_updated() {
        let body = json!({ "_id": "host1_disk", "result": "updated" });
        let receipt = OpenSearchClient::parse_receipt(&body, Some("host1_disk"));
        assert!(!receipt.created);
    }

    #[test]
    fn test_parse_receipt_generated_id() {
        let body = json!({ "_id": "Xy12", "result": "created" });
        let receipt = OpenSearchClient::parse_receipt(&body, None);
        assert_eq!(receipt.id, "Xy12");
    }

    #[test]
    fn test_receipt_from_response() {
        let body = json!({ "_id": "host1_disk", "result": "created" });
        let receipt = OpenSearchClient::receipt_from_response(Ok(body), Some("host1_disk"));
        assert!(receipt.created);

        let receipt = OpenSearchClient::receipt_from_response(
            Err("expected value at line 1 column 1".to_string()),
            Some("host1_disk"),
        );
        assert_eq!(receipt.id, "host1_disk");
        assert!(!receipt.created);
    }

    #[test]
    fn test_parse_receipt_unreadable_body_falls_back_to_requested_id() {
        let receipt = OpenSearchClient::parse_receipt(&Value::Null, Some("host1_disk"));
        assert_eq!(receipt.id, "host1_disk");
        assert!(!receipt.created);
    }
}
