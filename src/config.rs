//! Runner configuration loaded from environment variables

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the execution engine
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Interpreter invoked against the workspace source file
    pub interpreter: String,
    /// Name of the source file inside a workspace (e.g., "main.py")
    pub source_file: String,
    /// Wall-clock limit applied to every run (default: 10s)
    pub time_limit: Duration,
    /// Maximum accepted size of submitted code in bytes
    pub max_code_bytes: usize,
    /// Directory under which workspaces are created
    pub scratch_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".into(),
            source_file: "main.py".into(),
            time_limit: Duration::from_millis(10_000),
            max_code_bytes: 131_072,
            scratch_dir: std::env::temp_dir(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration, with environment overrides on top of defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let time_limit = std::env::var("RUNNER_TIME_LIMIT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.time_limit);

        let max_code_bytes = std::env::var("RUNNER_MAX_CODE_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.max_code_bytes);

        Self {
            interpreter: std::env::var("RUNNER_INTERPRETER")
                .unwrap_or(defaults.interpreter),
            source_file: std::env::var("RUNNER_SOURCE_FILE")
                .unwrap_or(defaults.source_file),
            time_limit,
            max_code_bytes,
            scratch_dir: std::env::var("RUNNER_SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.scratch_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.source_file, "main.py");
        assert_eq!(config.time_limit, Duration::from_secs(10));
        assert_eq!(config.max_code_bytes, 131_072);
    }
}
