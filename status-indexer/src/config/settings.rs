//! Command-line settings.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::environment::DEFAULT_ENVIRONMENT_FILE;
use crate::IndexingError;
use status_indexer_pipeline::{InputCategory, InputSelection};
use status_indexer_repository::config::{DEFAULT_HOST, DEFAULT_PORT};
use status_indexer_repository::opensearch::DEFAULT_INDEX_NAME;
use status_indexer_repository::StoreConfig;

/// Write a single check result into the status index, replacing the previous
/// result for the same client and check.
#[derive(Parser, Debug, Clone)]
#[command(name = "status-indexer")]
#[command(about = "Send updated check status to a search index", long_about = None)]
pub struct Settings {
    /// Index to write into
    #[arg(short, long, env = "ES_STATUS_INDEX", default_value = DEFAULT_INDEX_NAME)]
    pub index: String,

    /// Search store host
    #[arg(long, env = "ES_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Search store port
    #[arg(short, long, env = "ES_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Read the event from stdin
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub read_stdin: bool,

    /// Read the event from this file instead of stdin
    #[arg(long, env = "STATUS_INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Input category (sensu or user)
    #[arg(long, default_value = "sensu")]
    pub category: String,

    /// JSON file describing the deployment environment
    #[arg(long, env = "SENSU_ENVIRONMENT_FILE", default_value = DEFAULT_ENVIRONMENT_FILE)]
    pub environment_file: PathBuf,

    /// Build and log the document without sending it
    #[arg(short, long, alias = "debug")]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Settings {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.host.clone(), self.port)
    }

    pub fn input_selection(&self) -> InputSelection {
        InputSelection {
            read_stdin: self.read_stdin,
            input_file: self.input_file.clone(),
        }
    }

    pub fn input_category(&self) -> Result<InputCategory, IndexingError> {
        Ok(self.category.parse::<InputCategory>()?)
    }
}
