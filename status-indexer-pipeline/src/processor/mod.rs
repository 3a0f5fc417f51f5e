//! Processor module for the status indexer pipeline.
//!
//! Turns decoded events into index documents.

mod event_processor;
pub mod normalizer;

pub use event_processor::EventProcessor;
