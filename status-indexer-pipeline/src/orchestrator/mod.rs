//! Orchestrator module for the status indexer pipeline.
//!
//! Runs one event through the pipeline: read, normalize, ensure the index,
//! write, report.

use tracing::{info, instrument};

use crate::errors::PipelineError;
use crate::processor::EventProcessor;
use crate::source::EventSource;
use status_indexer_repository::{IndexClient, UpsertReceipt};
use status_indexer_shared::IndexDocument;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The document was written and the store confirmed it.
    Written {
        index: String,
        receipt: UpsertReceipt,
    },
    /// Dry run: the document was built but nothing was sent to the store.
    DryRun { document: IndexDocument },
}

/// Orchestrator that coordinates the pipeline components.
pub struct Orchestrator {
    source: EventSource,
    processor: EventProcessor,
    client: IndexClient,
    index: String,
    dry_run: bool,
}

impl Orchestrator {
    /// Create a new orchestrator writing into `index`.
    pub fn new(
        source: EventSource,
        processor: EventProcessor,
        client: IndexClient,
        index: impl Into<String>,
    ) -> Self {
        Self {
            source,
            processor,
            client,
            index: index.into(),
            dry_run: false,
        }
    }

    /// Build and log the document without touching the store.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the pipeline once.
    ///
    /// Input and decode failures return before the store is contacted. Success
    /// is returned only after the store has confirmed the write.
    #[instrument(skip(self), fields(index = %self.index))]
    pub async fn run(&mut self) -> Result<RunOutcome, PipelineError> {
        let event = self.source.read()?;
        let document = self.processor.process(&event)?;

        if self.dry_run {
            let body = document
                .to_json()
                .map_err(|e| PipelineError::decode(e.to_string()))?;
            info!(
                doc_type = %document.doc_type,
                doc_id = ?document.id,
                document = %body,
                "Dry run, document not sent"
            );
            return Ok(RunOutcome::DryRun { document });
        }

        self.client.ensure_index(&self.index).await?;
        let receipt = self.client.upsert(&self.index, &document).await?;

        info!(
            doc_type = %document.doc_type,
            doc_id = %receipt.id,
            created = receipt.created,
            "Record added"
        );

        Ok(RunOutcome::Written {
            index: self.index.clone(),
            receipt,
        })
    }
}
