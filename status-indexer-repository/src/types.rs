//! Result types for document store operations.

/// Outcome of asking the store whether an index exists.
///
/// A failed probe is kept distinct from a definite "absent" so callers can log
/// it, but both lead to a creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexProbe {
    Exists,
    Absent,
    /// The probe itself failed (transport error or unexpected status).
    ProbeFailed(String),
}

/// Outcome of an index creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateIndexOutcome {
    Created,
    /// Another writer created the index first.
    AlreadyExists,
}

/// Confirmation returned by the store after a document write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertReceipt {
    /// Id of the written document (store-assigned when none was given).
    pub id: String,
    /// True if the write created the document, false if it replaced one.
    pub created: bool,
}
