//! Error types for the connectivity probe.

use thiserror::Error;

/// Failure kinds of a probe run.
///
/// All variants share the same operator remediation text; the kind is kept
/// so logs and callers can tell where the attempt stopped.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The connection string could not be parsed.
    #[error("Invalid connection string: {0}")]
    InvalidUri(String),

    /// The server could not be reached, or refused the client.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Connected, but the collection listing failed.
    #[error("Failed to list collections: {0}")]
    ListCollections(String),
}

impl ProbeError {
    /// Name of the step that failed, for structured logs.
    pub fn stage(&self) -> &'static str {
        match self {
            ProbeError::InvalidUri(_) => "parse",
            ProbeError::Connection(_) => "connect",
            ProbeError::ListCollections(_) => "list_collections",
        }
    }
}

/// Result alias used throughout the probe.
pub type ProbeResult<T> = Result<T, ProbeError>;
