//! Connection settings for the document store.

use url::Url;

use crate::errors::StoreError;

/// Default store host.
pub const DEFAULT_HOST: &str = "elasticsearch.service.consul";

/// Default store port.
pub const DEFAULT_PORT: u16 = 9200;

/// Where the document store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl StoreConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Compose the store URL from host and port.
    pub fn url(&self) -> Result<Url, StoreError> {
        let raw = format!("http://{}:{}", self.host, self.port);
        Url::parse(&raw)
            .map_err(|e| StoreError::connection(format!("Invalid store URL {}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_composition() {
        let config = StoreConfig::new("localhost", 9201);
        assert_eq!(config.url().unwrap().as_str(), "http://localhost:9201/");
    }

    #[test]
    fn test_default() {
        let config = StoreConfig::default();
        assert_eq!(
            config.url().unwrap().as_str(),
            "http://elasticsearch.service.consul:9200/"
        );
    }

    #[test]
    fn test_invalid_host() {
        let config = StoreConfig::new("not a host", 9200);
        assert!(matches!(config.url(), Err(StoreError::ConnectionError(_))));
    }
}
