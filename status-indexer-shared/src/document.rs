//! Documents written to the status index.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The latest known status of one (client, check) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDocument {
    /// Device the check result is about.
    pub monitored_instance: String,
    /// Sensu client that reported the result.
    pub sensu_client: String,
    /// RFC-3339 UTC time the check ran.
    pub incident_timestamp: String,
    pub check_name: String,
    /// Human-readable check status (`OK`, `CRITICAL`, ...).
    pub check_state: String,
    /// Deployment label (`Prod`, `Dev`, ...).
    pub sensu_env: String,
    pub tags: Vec<String>,
    pub instance_address: String,
    /// Always empty until state durations are tracked.
    pub check_state_duration: String,
}

/// An ad-hoc operator record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    pub product: String,
    pub data: String,
    /// RFC-3339 UTC timestamp.
    pub timestamp: String,
}

/// Document category, passed to the store alongside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// A normalized Sensu check result.
    Sensu,
    /// An operator-supplied record.
    User,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Sensu => "sensu",
            DocumentType::User => "user",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an index document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocumentBody {
    Status(StatusDocument),
    User(UserDocument),
}

/// A document ready to be written, with its category and identity.
///
/// Status documents carry a deterministic id so a newer result for the same
/// (client, check) pair replaces the older one. User documents carry no id and
/// the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    pub doc_type: DocumentType,
    pub id: Option<String>,
    pub body: DocumentBody,
}

impl IndexDocument {
    /// A status document keyed by `id`.
    pub fn status(id: impl Into<String>, document: StatusDocument) -> Self {
        Self {
            doc_type: DocumentType::Sensu,
            id: Some(id.into()),
            body: DocumentBody::Status(document),
        }
    }

    /// A user document with a store-assigned id.
    pub fn user(document: UserDocument) -> Self {
        Self {
            doc_type: DocumentType::User,
            id: None,
            body: DocumentBody::User(document),
        }
    }

    /// The field map sent to the store.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(&self.body)
    }
}
