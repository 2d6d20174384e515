//! Fault taxonomy for the execution engine
//!
//! Only `Fault` represents a real failure of the subsystem itself.
//! Timeouts and failing submissions are ordinary `RunOutcome` data, never
//! errors, so callers branch on data instead of intercepting panics or
//! type-erased errors.

use thiserror::Error;

/// Infrastructure-level failure of the execution subsystem.
///
/// Recovered at the service boundary into a generic diagnostic result;
/// the detailed message is for logs only and never reaches the caller.
#[derive(Debug, Error)]
pub enum Fault {
    /// The filesystem could not allocate or populate a workspace
    #[error("failed to materialize workspace: {0}")]
    Workspace(#[source] std::io::Error),

    /// The interpreter process could not be spawned
    #[error("failed to spawn interpreter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child spawned but its output could not be collected
    #[error("failed to collect process output: {0}")]
    Collect(#[source] std::io::Error),
}

/// Rejection of an execution request before anything is run.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing required field: code")]
    MissingCode,

    #[error("submitted code exceeds the {limit} byte limit")]
    CodeTooLarge { limit: usize },
}
