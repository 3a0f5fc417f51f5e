//! Loading of the deployment environment file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::IndexingError;
use status_indexer_shared::EnvironmentContext;

/// Where provisioning drops the environment description.
pub const DEFAULT_ENVIRONMENT_FILE: &str = "/etc/sensu/conf.d/monitoring_infra.json";

/// Load the environment context once at startup.
///
/// A missing file leaves the environment unset, which documents label as
/// `Test`. A file that exists but cannot be read or parsed is an error.
pub fn load_environment(path: &Path) -> Result<EnvironmentContext, IndexingError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Environment file not found, environment unset");
            return Ok(EnvironmentContext::unset());
        }
        Err(e) => {
            return Err(IndexingError::config(format!(
                "Failed to read environment file {}: {}",
                path.display(),
                e
            )))
        }
    };

    let context = EnvironmentContext::from_json(&bytes).map_err(|e| {
        IndexingError::config(format!(
            "Failed to parse environment file {}: {}",
            path.display(),
            e
        ))
    })?;

    info!(
        path = %path.display(),
        environment = ?context.environment(),
        "Loaded environment context"
    );
    Ok(context)
}
