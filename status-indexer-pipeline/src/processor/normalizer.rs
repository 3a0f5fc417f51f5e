//! Field derivation rules for status documents.
//!
//! Every function here is pure: the same event and context always produce the
//! same document.

use chrono::{DateTime, SecondsFormat};

use crate::errors::PipelineError;
use status_indexer_shared::{
    CheckEvent, EnvironmentContext, IndexDocument, StatusDocument, UserDocument, UserEvent,
};

/// Deterministic document id for a (client, check) pair.
///
/// Empty names are not rejected here and yield ids such as `_disk`.
pub fn document_id(client_name: &str, check_name: &str) -> String {
    format!("{}_{}", client_name, check_name)
}

/// The device the result is about: the check source if set, else the client.
pub fn monitored_instance(event: &CheckEvent) -> String {
    event
        .check_source()
        .unwrap_or_else(|| event.client_name())
        .to_string()
}

/// Map a check exit status to its name.
pub fn status_name(status: i64) -> &'static str {
    match status {
        0 => "OK",
        1 => "WARNING",
        2 => "CRITICAL",
        3 => "UNKNOWN",
        126 => "PERMISSION DENIED",
        127 => "CONFIG ERROR",
        _ => "ERROR",
    }
}

/// Map an environment code to its display label.
///
/// Anything unrecognised, including no environment at all, is `Test` so a
/// misconfigured host never reports as production.
pub fn environment_label(environment: Option<&str>) -> &'static str {
    match environment {
        Some("prd") => "Prod",
        Some("dev") => "Dev",
        Some("stg") => "Stg",
        Some("vagrant") => "Vagrant",
        _ => "Test",
    }
}

/// Searchable form of the check name. Currently the name itself.
pub fn check_name(name: &str) -> String {
    name.to_string()
}

/// How long the check has held its current state. Not tracked yet.
pub fn check_state_duration() -> String {
    String::new()
}

/// Format epoch seconds as an RFC-3339 UTC timestamp, e.g. `2023-11-14T22:13:20Z`.
pub fn format_timestamp(epoch_seconds: i64) -> Result<String, PipelineError> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| {
            PipelineError::decode(format!("Timestamp {} is out of range", epoch_seconds))
        })
}

/// Normalize a check event into a status document keyed by client and check name.
pub fn normalize_check(
    event: &CheckEvent,
    context: &EnvironmentContext,
) -> Result<IndexDocument, PipelineError> {
    let document = StatusDocument {
        monitored_instance: monitored_instance(event),
        sensu_client: event.client_name().to_string(),
        incident_timestamp: format_timestamp(event.check.issued)?,
        check_name: check_name(event.check_name()),
        check_state: status_name(event.check.status).to_string(),
        sensu_env: environment_label(context.environment()).to_string(),
        tags: event.check.tags.clone(),
        instance_address: event.client_address().to_string(),
        check_state_duration: check_state_duration(),
    };

    Ok(IndexDocument::status(
        document_id(event.client_name(), event.check_name()),
        document,
    ))
}

/// Normalize an operator record. The store assigns its id.
pub fn normalize_user(event: &UserEvent) -> Result<IndexDocument, PipelineError> {
    Ok(IndexDocument::user(UserDocument {
        product: event.product.clone(),
        data: event.data.clone(),
        timestamp: format_timestamp(event.timestamp)?,
    }))
}
