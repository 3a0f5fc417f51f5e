//! Deployment context used to decorate documents.

use serde::Deserialize;

/// Deployment context of the machine running the handler, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentContext {
    /// Short environment code such as `prd`, `dev`, `stg` or `vagrant`.
    pub environment: Option<String>,
    pub fqdn: Option<String>,
    pub hostname: Option<String>,
}

#[derive(Deserialize)]
struct EnvironmentFile {
    environment: Option<String>,
    sensu: Option<SensuSection>,
}

#[derive(Deserialize)]
struct SensuSection {
    environment: Option<String>,
    fqdn: Option<String>,
    hostname: Option<String>,
}

impl EnvironmentContext {
    /// Create a context for the given environment code.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: Some(environment.into()),
            ..Default::default()
        }
    }

    /// A context with no environment set.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Parse the environment file.
    ///
    /// Accepts either a top-level `environment` field or the nested
    /// `{"sensu": {"environment": ...}}` layout written by provisioning. The
    /// top-level field wins when both are present.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        let file: EnvironmentFile = serde_json::from_slice(bytes)?;
        let (nested_env, fqdn, hostname) = match file.sensu {
            Some(s) => (s.environment, s.fqdn, s.hostname),
            None => (None, None, None),
        };

        Ok(Self {
            environment: file.environment.or(nested_env),
            fqdn,
            hostname,
        })
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }
}
