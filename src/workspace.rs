//! Workspace management for ephemeral source files
//!
//! A workspace is a uniquely named temporary directory holding the source
//! text for exactly one process invocation. Destruction happens in `Drop`,
//! so every exit path (success, fault, early return) tears the files down;
//! no workspace is ever reused across requests or across the raw and graded
//! runs of a single request.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Fault;

/// Ephemeral on-disk holder for one run's source text
#[derive(Debug)]
pub struct Workspace {
    // Held for its Drop impl; removing the directory removes the source file.
    _dir: TempDir,
    source_path: PathBuf,
}

impl Workspace {
    /// Materialize `source` as a file under a fresh uniquely named directory
    pub fn create(scratch_dir: &Path, file_name: &str, source: &str) -> Result<Self, Fault> {
        let dir = tempfile::Builder::new()
            .prefix("run-")
            .tempdir_in(scratch_dir)
            .map_err(Fault::Workspace)?;

        let source_path = dir.path().join(file_name);
        std::fs::write(&source_path, source).map_err(Fault::Workspace)?;

        Ok(Self {
            _dir: dir,
            source_path,
        })
    }

    /// Path of the materialized source file
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_writes_source() {
        let scratch = tempfile::tempdir().unwrap();
        let ws = Workspace::create(scratch.path(), "main.py", "print(1)").unwrap();

        assert!(ws.source_path().is_file());
        assert_eq!(std::fs::read_to_string(ws.source_path()).unwrap(), "print(1)");
    }

    #[test]
    fn test_drop_removes_files() {
        let scratch = tempfile::tempdir().unwrap();
        let path = {
            let ws = Workspace::create(scratch.path(), "main.py", "").unwrap();
            ws.source_path().to_path_buf()
        };

        assert!(!path.exists());
        assert!(std::fs::read_dir(scratch.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_workspaces_are_unique() {
        let scratch = tempfile::tempdir().unwrap();
        let a = Workspace::create(scratch.path(), "main.py", "a").unwrap();
        let b = Workspace::create(scratch.path(), "main.py", "b").unwrap();

        assert_ne!(a.source_path(), b.source_path());
    }

    #[test]
    fn test_create_fails_on_missing_scratch_dir() {
        let scratch = tempfile::tempdir().unwrap();
        let missing = scratch.path().join("does-not-exist");

        let result = Workspace::create(&missing, "main.py", "");
        assert!(matches!(result, Err(Fault::Workspace(_))));
    }
}
