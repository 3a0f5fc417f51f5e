use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use status_indexer::{Dependencies, IndexingError, Settings};
use status_indexer_pipeline::RunOutcome;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries only the confirmation line
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(settings: &Settings) -> Result<RunOutcome, IndexingError> {
    let mut deps = Dependencies::new(settings)?;
    Ok(deps.orchestrator.run().await?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    let settings = Settings::parse();
    init_tracing(settings.log_json);

    info!(
        index = %settings.index,
        category = %settings.category,
        dry_run = settings.dry_run,
        "Starting status indexer"
    );

    match run(&settings).await {
        Ok(RunOutcome::Written { index, .. }) => {
            println!("Record added to {}", index);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::DryRun { .. }) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_connection_error() {
                error!(
                    host = %settings.host,
                    port = settings.port,
                    index = %settings.index,
                    error = %e,
                    "Search store unreachable"
                );
            } else {
                error!(index = %settings.index, error = %e, "Failed to index event");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
