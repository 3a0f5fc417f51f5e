//! Dependency initialization and wiring for the status indexer.

use tracing::info;

use crate::config::environment::load_environment;
use crate::config::settings::Settings;
use crate::IndexingError;
use status_indexer_pipeline::{EventProcessor, EventSource, Orchestrator};
use status_indexer_repository::{DocumentStore, IndexClient, OpenSearchClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies against the configured OpenSearch store.
    ///
    /// No request is sent to the store here.
    pub fn new(settings: &Settings) -> Result<Self, IndexingError> {
        let store_config = settings.store_config();

        info!(
            host = %store_config.host,
            port = store_config.port,
            index = %settings.index,
            "Initializing dependencies"
        );

        let store = OpenSearchClient::new(&store_config)?;
        Self::with_store(settings, Box::new(store))
    }

    /// Initialize all dependencies around an already built store.
    pub fn with_store(
        settings: &Settings,
        store: Box<dyn DocumentStore>,
    ) -> Result<Self, IndexingError> {
        let category = settings.input_category()?;
        let context = load_environment(&settings.environment_file)?;

        let source = EventSource::new(settings.input_selection(), category);
        let processor = EventProcessor::new(context);
        let client = IndexClient::new(store);

        let orchestrator = Orchestrator::new(source, processor, client, settings.index.clone())
            .with_dry_run(settings.dry_run);

        Ok(Self { orchestrator })
    }
}
