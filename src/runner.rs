//! Process runner - bounded execution of untrusted code
//!
//! Spawns a fresh interpreter process per run against a workspace source
//! file, captures stdout and stderr separately, and enforces a hard
//! wall-clock limit. On the deadline the child's entire process group is
//! killed, so submissions that fork do not leave orphans behind.
//!
//! The runner does NOT:
//! - Interpret exit codes (a non-zero exit is legitimate outcome data)
//! - Know about exercises, grading, or hints
//! - Share any state between runs

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::Fault;

/// Outcome of one process invocation (raw facts, no verdict interpretation)
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Captured standard output (empty if the run timed out)
    pub stdout: String,
    /// Captured standard error (empty if the run timed out)
    pub stderr: String,
    /// Exit code (-1 when killed by a signal or timed out)
    pub exit_code: i32,
    /// Whether the wall-clock limit expired before termination
    pub timed_out: bool,
}

impl RunOutcome {
    /// Check if the process terminated normally with exit code 0
    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == 0
    }
}

/// Runner that executes a source file with a bounded wall-clock time
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    interpreter: String,
    time_limit: Duration,
}

impl ProcessRunner {
    pub fn new(interpreter: impl Into<String>, time_limit: Duration) -> Self {
        Self {
            interpreter: interpreter.into(),
            time_limit,
        }
    }

    /// Wall-clock limit this runner enforces
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Run `interpreter <source_path>` to completion or the deadline.
    ///
    /// Timeouts and non-zero exits are encoded in the returned `RunOutcome`;
    /// only a failure to spawn or to collect output is a `Fault`.
    pub async fn run(&self, source_path: &Path) -> Result<RunOutcome, Fault> {
        debug!(
            "Running {} {:?} (limit {:?})",
            self.interpreter, source_path, self.time_limit
        );

        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(source_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .process_group(0)
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|source| Fault::Spawn {
            program: self.interpreter.clone(),
            source,
        })?;
        let pid = child.id();

        match tokio::time::timeout(self.time_limit, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(RunOutcome {
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                exit_code: output.status.code().unwrap_or(-1),
                timed_out: false,
            }),
            Ok(Err(e)) => Err(Fault::Collect(e)),
            Err(_) => {
                // Deadline elapsed. The child itself is already being killed
                // (kill_on_drop); the group kill reaches anything it spawned.
                if let Some(pid) = pid {
                    let _ = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL);
                }
                warn!(
                    "Run exceeded {:?} wall-clock limit, process group killed",
                    self.time_limit
                );
                // Partial output is discarded on timeout
                Ok(RunOutcome {
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: -1,
                    timed_out: true,
                })
            }
        }
    }
}
