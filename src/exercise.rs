//! Exercise records and lookup
//!
//! An exercise supplies the hidden test code appended to a submission for
//! the graded run, plus an ordered hint list shown on failure. The engine
//! only ever reads exercise records; they are owned by the platform's data
//! layer. `ExerciseLookup` is the injection seam: the shipped implementation
//! is a TOML file registry, a database-backed one can replace it without
//! touching the orchestrator.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

/// Hidden grading material for one exercise
#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: String,
    /// Test code appended to the submission for the graded run
    pub test_code: String,
    /// Ordered hints; only the first is ever surfaced
    pub hints: Vec<String>,
}

/// Capability to resolve an exercise identifier to its grading record.
///
/// An unresolved identifier is `None`, not an error; the orchestrator
/// degrades to an ungraded run.
#[async_trait]
pub trait ExerciseLookup: Send + Sync {
    async fn find(&self, id: &str) -> Option<Exercise>;
}

/// Raw TOML shape of one exercise entry
#[derive(Debug, Deserialize)]
struct RawExercise {
    test_code: String,
    #[serde(default)]
    hints: Vec<String>,
}

/// File-backed exercise registry, loaded once at startup
pub struct TomlExerciseStore {
    exercises: HashMap<String, Exercise>,
}

impl TomlExerciseStore {
    /// Load the registry from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read exercises config {:?}", path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse exercises config {:?}", path))
    }

    fn from_toml(content: &str) -> anyhow::Result<Self> {
        let raw: HashMap<String, RawExercise> = toml::from_str(content)?;

        let exercises = raw
            .into_iter()
            .map(|(id, raw)| {
                let exercise = Exercise {
                    id: id.clone(),
                    test_code: raw.test_code,
                    hints: raw.hints,
                };
                (id, exercise)
            })
            .collect();

        Ok(Self { exercises })
    }

    /// Number of loaded exercises
    pub fn count(&self) -> usize {
        self.exercises.len()
    }
}

#[async_trait]
impl ExerciseLookup for TomlExerciseStore {
    async fn find(&self, id: &str) -> Option<Exercise> {
        self.exercises.get(id).cloned()
    }
}
