//! Configuration and dependency wiring for the status indexer.

mod dependencies;
mod environment;
mod settings;

pub use dependencies::Dependencies;
pub use environment::{load_environment, DEFAULT_ENVIRONMENT_FILE};
pub use settings::Settings;
