//! Result aggregation
//!
//! Merges the raw run's output with the graded run's pass/fail outcome into
//! the single `ExecutionResult` payload returned across the service
//! boundary. The graded run's own output is consumed only for pass/fail
//! determination and never surfaced: the caller sees their own program's
//! output, not the hidden test's diagnostics.

use std::time::Duration;

use serde::Serialize;

use crate::runner::RunOutcome;

/// The sole value returned across the system boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    /// Present only when an exercise was graded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Present only on failure, when the exercise has hints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ExecutionResult {
    /// Generic diagnostic result for recovered infrastructure faults.
    /// Deliberately content-free: internal detail stays in the logs.
    pub fn diagnostic() -> Self {
        Self {
            stdout: String::new(),
            stderr: "internal error: execution could not be completed".to_string(),
            success: None,
            hint: None,
        }
    }
}

/// User-facing message for a run that exceeded the wall-clock limit
pub fn timeout_message(limit: Duration) -> String {
    format!("Execution timed out after {} seconds.", limit.as_secs_f32())
}

/// Merge raw and (optional) graded outcomes into an `ExecutionResult`.
///
/// A timed-out raw run takes precedence over everything: the timeout message
/// becomes stderr and grading is skipped, so `graded` must be `None` in that
/// case. A timed-out graded run is indistinguishable from a failing one,
/// except that no hint is attached.
pub fn aggregate(
    raw: &RunOutcome,
    graded: Option<&RunOutcome>,
    hints: &[String],
    timeout_msg: &str,
) -> ExecutionResult {
    if raw.timed_out {
        return ExecutionResult {
            stdout: String::new(),
            stderr: timeout_msg.to_string(),
            success: None,
            hint: None,
        };
    }

    let Some(graded) = graded else {
        return ExecutionResult {
            stdout: raw.stdout.clone(),
            stderr: raw.stderr.clone(),
            success: None,
            hint: None,
        };
    };

    let success = graded.is_success();
    let hint = if !success && !graded.timed_out {
        hints.first().cloned()
    } else {
        None
    };

    ExecutionResult {
        stdout: raw.stdout.clone(),
        stderr: raw.stderr.clone(),
        success: Some(success),
        hint,
    }
}
