//! Staging directory lifetime management.
//!
//! A scaffold run assembles the project tree in a uniquely named temporary
//! directory. The directory must be gone after the run on every exit path
//! (success, error, panic); `StagingDir` ties that guarantee to drop.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// RAII guard for a per-run staging directory.
///
/// The directory is created uniquely named under the system temp location
/// and removed when the guard is dropped. [`StagingDir::keep`] detaches the
/// directory for debugging.
#[derive(Debug)]
pub struct StagingDir {
    inner: TempDir,
}

impl StagingDir {
    /// Creates a fresh staging directory with a prefix derived from the
    /// project name.
    pub fn create(project_name: &str) -> Result<Self> {
        let prefix = format!("kindling-{}-", project_name);
        let inner = tempfile::Builder::new()
            .prefix(&prefix)
            .tempdir()
            .map_err(|e| Error::staging(e.to_string()))?;

        tracing::debug!("created staging directory {}", inner.path().display());
        Ok(Self { inner })
    }

    /// Path of the staging directory.
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Detaches the directory from the guard so it survives the run.
    pub fn keep(self) -> PathBuf {
        self.inner.keep()
    }

    /// Removes the directory now, reporting any removal error.
    ///
    /// Dropping the guard removes the directory too, but silently; the
    /// orchestrator prefers the checked variant on the success path.
    pub fn close(self) -> Result<()> {
        self.inner.close().map_err(Error::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_uses_project_prefix() {
        let staging = StagingDir::create("demo").unwrap();
        let name = staging
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with("kindling-demo-"), "got: {}", name);
    }

    #[test]
    fn test_drop_removes_directory() {
        let staging = StagingDir::create("demo").unwrap();
        let path = staging.path().to_path_buf();
        assert!(path.is_dir());

        drop(staging);
        assert!(!path.exists());
    }

    #[test]
    fn test_close_removes_directory() {
        let staging = StagingDir::create("demo").unwrap();
        let path = staging.path().to_path_buf();

        staging.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_keep_retains_directory() {
        let staging = StagingDir::create("demo").unwrap();
        let path = staging.keep();

        assert!(path.is_dir());
        std::fs::remove_dir_all(&path).unwrap();
    }

    #[test]
    fn test_two_stagings_do_not_collide() {
        let a = StagingDir::create("demo").unwrap();
        let b = StagingDir::create("demo").unwrap();
        assert_ne!(a.path(), b.path());
    }
}
