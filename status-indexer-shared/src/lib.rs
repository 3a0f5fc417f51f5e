//! # Status Indexer Shared
//!
//! Shared types for the check status indexer: the incoming events, the
//! deployment context they are decorated with, and the documents written to
//! the index.

pub mod document;
pub mod environment;
pub mod event;

pub use document::{DocumentBody, DocumentType, IndexDocument, StatusDocument, UserDocument};
pub use environment::EnvironmentContext;
pub use event::{CheckEvent, CheckResult, ClientInfo, UserEvent};
