//! # Status Indexer Pipeline
//!
//! This crate turns one monitoring event into one document in the status
//! index.
//!
//! ## Architecture
//!
//! The pipeline is strictly sequential:
//!
//! 1. **Source**: Reads one event from stdin or a file and decodes it
//! 2. **Processor**: Validates the event and normalizes it into a document
//! 3. **Orchestrator**: Ensures the index exists, writes the document and
//!    reports the result

pub mod errors;
pub mod orchestrator;
pub mod processor;
pub mod source;

pub use errors::PipelineError;
pub use orchestrator::{Orchestrator, RunOutcome};
pub use processor::EventProcessor;
pub use source::{EventSource, IncomingEvent, InputCategory, InputSelection, InputSource};
