//! Incoming event types.
//!
//! A `CheckEvent` is one result of a Sensu check as handed to a handler on
//! stdin. A `UserEvent` is an ad-hoc record supplied by an operator.

use serde::{Deserialize, Deserializer, Serialize};

/// The host that ran the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Name the Sensu client registered with.
    pub name: String,
    /// Address of the client.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

/// The check result itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Device the result is about when it differs from the reporting client
    /// (SNMP traps, containers).
    #[serde(default)]
    pub source: Option<String>,
    /// Logical name of the check.
    pub name: String,
    /// Epoch seconds at which the check ran.
    pub issued: i64,
    /// Exit status of the check command.
    pub status: i64,
    /// Free-form labels, in the order they were configured.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// One observed health-check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEvent {
    pub client: ClientInfo,
    pub check: CheckResult,
}

impl CheckEvent {
    /// Create an event with no source override and no tags.
    pub fn new(
        client_name: impl Into<String>,
        client_address: impl Into<String>,
        check_name: impl Into<String>,
        issued: i64,
        status: i64,
    ) -> Self {
        Self {
            client: ClientInfo {
                name: client_name.into(),
                address: client_address.into(),
            },
            check: CheckResult {
                source: None,
                name: check_name.into(),
                issued,
                status,
                tags: Vec::new(),
            },
        }
    }

    /// Set the source override.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.check.source = Some(source.into());
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn client_name(&self) -> &str {
        &self.client.name
    }

    pub fn client_address(&self) -> &str {
        &self.client.address
    }

    pub fn check_name(&self) -> &str {
        &self.check.name
    }

    /// The source override, if present and non-empty.
    pub fn check_source(&self) -> Option<&str> {
        self.check.source.as_deref().filter(|s| !s.is_empty())
    }
}

/// An ad-hoc record supplied by an operator rather than by Sensu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    #[serde(alias = "Product")]
    pub product: String,
    /// Epoch seconds.
    #[serde(alias = "Timestamp")]
    pub timestamp: i64,
    #[serde(alias = "Data", default, deserialize_with = "null_as_default")]
    pub data: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
