//! Execution service - per-request orchestration
//!
//! Drives one request through the pipeline: validate, materialize a
//! workspace, raw run, then (when an exercise resolves) compose the hidden
//! harness and grade in a second isolated workspace, and aggregate. The two
//! runs are sequential; each gets its own workspace and child process, and
//! the raw workspace is destroyed before the graded run starts.
//!
//! This boundary never propagates an infrastructure fault: whatever the
//! workspace manager or runner reports is logged in full and recovered into
//! a generic diagnostic result, so the caller always receives an
//! `ExecutionResult`-shaped payload.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, info};

use crate::aggregate::{aggregate, timeout_message, ExecutionResult};
use crate::config::RunnerConfig;
use crate::error::{Fault, ValidationError};
use crate::exercise::ExerciseLookup;
use crate::harness;
use crate::runner::{ProcessRunner, RunOutcome};
use crate::workspace::Workspace;

/// Inbound payload for one execution request
#[derive(Debug, Deserialize)]
pub struct ExecutionRequest {
    pub code: Option<String>,
    #[serde(rename = "exerciseId")]
    pub exercise_id: Option<String>,
}

/// Orchestrator for bounded execution and optional grading
pub struct ExecutionService {
    config: RunnerConfig,
    runner: ProcessRunner,
    lookup: Arc<dyn ExerciseLookup>,
}

impl ExecutionService {
    pub fn new(config: RunnerConfig, lookup: Arc<dyn ExerciseLookup>) -> Self {
        let runner = ProcessRunner::new(config.interpreter.clone(), config.time_limit);
        Self {
            config,
            runner,
            lookup,
        }
    }

    /// Handle one request end to end.
    ///
    /// Only validation rejections surface as errors; infrastructure faults
    /// are recovered here into a generic diagnostic result.
    pub async fn execute(
        &self,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResult, ValidationError> {
        let code = self.validate(request)?;

        match self.run(code, request.exercise_id.as_deref()).await {
            Ok(result) => Ok(result),
            Err(fault) => {
                error!("Recovered execution fault: {fault}");
                Ok(ExecutionResult::diagnostic())
            }
        }
    }

    fn validate<'a>(&self, request: &'a ExecutionRequest) -> Result<&'a str, ValidationError> {
        let code = request.code.as_deref().ok_or(ValidationError::MissingCode)?;
        if code.len() > self.config.max_code_bytes {
            return Err(ValidationError::CodeTooLarge {
                limit: self.config.max_code_bytes,
            });
        }
        // An empty string is valid input; it executes as a no-op program
        Ok(code)
    }

    async fn run(&self, code: &str, exercise_id: Option<&str>) -> Result<ExecutionResult, Fault> {
        let timeout_msg = timeout_message(self.runner.time_limit());

        let raw = self.run_in_workspace(code).await?;

        // Timeout takes precedence over grading
        if raw.timed_out {
            return Ok(aggregate(&raw, None, &[], &timeout_msg));
        }

        let exercise = match exercise_id {
            Some(id) => {
                let found = self.lookup.find(id).await;
                if found.is_none() {
                    info!("Unknown exercise id '{}', running ungraded", id);
                }
                found
            }
            None => None,
        };

        let Some(exercise) = exercise else {
            return Ok(aggregate(&raw, None, &[], &timeout_msg));
        };

        let composed = harness::compose(code, &exercise.test_code);
        let graded = self.run_in_workspace(&composed).await?;

        Ok(aggregate(&raw, Some(&graded), &exercise.hints, &timeout_msg))
    }

    /// One process invocation against a fresh workspace; the workspace is
    /// destroyed before this returns, on every path.
    async fn run_in_workspace(&self, source: &str) -> Result<RunOutcome, Fault> {
        let workspace =
            Workspace::create(&self.config.scratch_dir, &self.config.source_file, source)?;
        self.runner.run(workspace.source_path()).await
    }
}
