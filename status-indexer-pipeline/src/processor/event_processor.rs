//! Event processor implementation.
//!
//! Validates decoded events and normalizes them into index documents.

use tracing::{debug, instrument};

use super::normalizer::{normalize_check, normalize_user};
use crate::errors::PipelineError;
use crate::source::IncomingEvent;
use status_indexer_shared::{CheckEvent, EnvironmentContext, IndexDocument};

/// Processor that turns events into documents for one deployment environment.
pub struct EventProcessor {
    context: EnvironmentContext,
}

impl EventProcessor {
    /// Create a processor decorating documents with `context`.
    pub fn new(context: EnvironmentContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &EnvironmentContext {
        &self.context
    }

    /// Process a single event.
    ///
    /// Check events with an empty client or check name are rejected, since
    /// their ids would collide across hosts or checks.
    #[instrument(skip(self, event))]
    pub fn process(&self, event: &IncomingEvent) -> Result<IndexDocument, PipelineError> {
        let document = match event {
            IncomingEvent::Check(check) => {
                Self::validate(check)?;
                normalize_check(check, &self.context)?
            }
            IncomingEvent::User(user) => normalize_user(user)?,
        };

        debug!(doc_type = %document.doc_type, doc_id = ?document.id, "Processed event");
        Ok(document)
    }

    fn validate(event: &CheckEvent) -> Result<(), PipelineError> {
        if event.client_name().trim().is_empty() {
            return Err(PipelineError::input("client.name is required"));
        }
        if event.check_name().trim().is_empty() {
            return Err(PipelineError::input("check.name is required"));
        }
        Ok(())
    }
}

impl Default for EventProcessor {
    fn default() -> Self {
        Self::new(EnvironmentContext::unset())
    }
}
