//! Source module for the status indexer pipeline.
//!
//! Reads exactly one event, from stdin or from a file, and decodes it.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::errors::PipelineError;
use status_indexer_shared::{CheckEvent, UserEvent};

/// Kind of record carried by the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputCategory {
    /// A Sensu check result.
    #[default]
    Sensu,
    /// An ad-hoc operator record.
    User,
}

impl FromStr for InputCategory {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensu" => Ok(InputCategory::Sensu),
            "user" => Ok(InputCategory::User),
            _ => Err(PipelineError::UnknownCategory(s.to_string())),
        }
    }
}

/// Where the event is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Input options as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSelection {
    pub read_stdin: bool,
    pub input_file: Option<PathBuf>,
}

impl InputSelection {
    /// Resolve the options to a single source.
    ///
    /// Stdin is read whenever it is enabled, even if a file is also set. The
    /// file is only read once stdin has been switched off.
    pub fn resolve(&self) -> Result<InputSource, PipelineError> {
        match (self.read_stdin, &self.input_file) {
            (true, _) => Ok(InputSource::Stdin),
            (false, Some(path)) => Ok(InputSource::File(path.clone())),
            (false, None) => Err(PipelineError::NoInputSource),
        }
    }
}

/// A decoded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingEvent {
    Check(CheckEvent),
    User(UserEvent),
}

/// Decode a payload of the given category.
pub fn decode(category: InputCategory, payload: &[u8]) -> Result<IncomingEvent, PipelineError> {
    let event = match category {
        InputCategory::Sensu => serde_json::from_slice(payload).map(IncomingEvent::Check),
        InputCategory::User => serde_json::from_slice(payload).map(IncomingEvent::User),
    };
    event.map_err(|e| PipelineError::decode(e.to_string()))
}

/// Reads one event from the selected input.
pub struct EventSource {
    selection: InputSelection,
    category: InputCategory,
    stdin: Box<dyn Read + Send>,
}

impl EventSource {
    /// Create a source reading from the process stdin when stdin is selected.
    pub fn new(selection: InputSelection, category: InputCategory) -> Self {
        Self {
            selection,
            category,
            stdin: Box::new(io::stdin()),
        }
    }

    /// Replace the stdin reader.
    pub fn with_stdin(mut self, reader: impl Read + Send + 'static) -> Self {
        self.stdin = Box::new(reader);
        self
    }

    pub fn category(&self) -> InputCategory {
        self.category
    }

    /// Read and decode the event. The input is read once, in full.
    #[instrument(skip(self), fields(category = ?self.category))]
    pub fn read(&mut self) -> Result<IncomingEvent, PipelineError> {
        let source = self.selection.resolve()?;

        let payload = match &source {
            InputSource::Stdin => {
                let mut buf = Vec::new();
                self.stdin
                    .read_to_end(&mut buf)
                    .map_err(|e| PipelineError::input(format!("Failed to read stdin: {}", e)))?;
                buf
            }
            InputSource::File(path) => fs::read(path).map_err(|e| {
                PipelineError::input(format!("Failed to read {}: {}", path.display(), e))
            })?,
        };

        debug!(source = ?source, bytes = payload.len(), "Read event payload");
        decode(self.category, &payload)
    }
}
