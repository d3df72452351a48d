use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error returned by the remote boundary for expected business
/// failures. Remote calls never panic for these; they return this envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct RemoteError {
    pub code: String,
    pub message: String,
}

impl RemoteError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Payload failed server-side shape checks.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// The targeted identity is no longer recognized (deleted out-of-band).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    /// Duplicate membership or similar server-side constraint violation.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }
}

/// Error surfaced by [`EditSession::save`](crate::session::EditSession::save)
/// when the remote rejects an operation. The plan halted at `operation`; the
/// `applied` operations before it succeeded, are committed to the baseline,
/// and will not be re-issued on retry.
#[derive(Debug, Error)]
#[error("sync halted at '{operation}' after {applied} applied operation(s): {source}")]
pub struct SyncError {
    /// Label of the operation that failed.
    pub operation: String,
    /// How many operations of the plan had already succeeded.
    pub applied: usize,
    /// The server-provided error, verbatim, for display.
    #[source]
    pub source: RemoteError,
}
