//! Scaffold orchestration: stage, package, clean up.
//!
//! One run is a straight line: create the staging directory, let the source
//! provider populate it, package it into `<output_dir>/<name>.zip`, remove
//! the staging directory. The staging guard removes the directory on error
//! paths too; a failed packaging step additionally deletes the partial
//! archive so no unusable output is left behind.

use crate::archive::{ArchiveConfig, ZipArchiver};
use crate::error::Result;
use crate::provider::SourceProvider;
use crate::staging::StagingDir;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Options for one scaffold-and-package cycle.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Project name; derives the staging prefix and the archive base name
    pub project_name: String,

    /// Directory the archive is written to
    pub output_dir: PathBuf,

    /// Archive configuration
    pub archive: ArchiveConfig,

    /// Retain the staging directory instead of removing it
    pub keep_staging: bool,
}

impl ScaffoldOptions {
    /// Creates options with defaults: archive in the current directory,
    /// default compression, staging removed.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            output_dir: PathBuf::from("."),
            archive: ArchiveConfig::default(),
            keep_staging: false,
        }
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the archive configuration.
    pub fn with_archive_config(mut self, archive: ArchiveConfig) -> Self {
        self.archive = archive;
        self
    }

    /// Sets whether the staging directory is retained.
    pub fn with_keep_staging(mut self, keep_staging: bool) -> Self {
        self.keep_staging = keep_staging;
        self
    }
}

/// Result of a scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldResult {
    /// Path to the output archive
    pub archive_path: PathBuf,

    /// Staging directory path, when retained
    pub staging_path: Option<PathBuf>,

    /// Regular files staged and packaged
    pub file_count: usize,

    /// Total archive entries, directory markers included
    pub entry_count: usize,

    /// Archive size in bytes
    pub size_bytes: u64,

    /// Duration of the whole cycle in seconds
    pub duration_seconds: f64,
}

/// Runs scaffold-and-package cycles.
pub struct Scaffolder {
    source: Box<dyn SourceProvider>,
    options: ScaffoldOptions,
}

impl Scaffolder {
    /// Creates a scaffolder for the given source and options.
    pub fn new(source: Box<dyn SourceProvider>, options: ScaffoldOptions) -> Self {
        Self { source, options }
    }

    /// Runs one scaffold-and-package cycle.
    pub fn run(&self) -> Result<ScaffoldResult> {
        let start = Instant::now();

        let staging = StagingDir::create(&self.options.project_name)?;
        tracing::info!(
            "staging {} into {}",
            self.source.describe(),
            staging.path().display()
        );

        self.source.populate(staging.path())?;

        fs::create_dir_all(&self.options.output_dir)?;
        let archive_path = self
            .options
            .output_dir
            .join(format!("{}.zip", self.options.project_name));

        let archiver = ZipArchiver::new(self.options.archive.clone());
        let archive = match archiver.create(staging.path(), &archive_path) {
            Ok(archive) => archive,
            Err(err) => {
                // A half-written archive is not a usable output.
                let _ = fs::remove_file(&archive_path);
                return Err(err);
            }
        };

        let staging_path = if self.options.keep_staging {
            Some(staging.keep())
        } else {
            if let Err(err) = staging.close() {
                tracing::warn!("failed to remove staging directory: {}", err);
            }
            None
        };

        Ok(ScaffoldResult {
            archive_path: archive.archive_path,
            staging_path,
            file_count: archive.file_count,
            entry_count: archive.entry_count,
            size_bytes: archive.size_bytes,
            duration_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
