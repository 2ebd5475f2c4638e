//! Source providers populate a staging directory with project content.
//!
//! The scaffolder does not care where the staged tree comes from; anything
//! satisfying [`SourceProvider`] can feed it. Copying a bundled template
//! directory is the shipped strategy. Shelling out to an external project
//! generator would be another implementation of the same contract.

use crate::copier::{copy_tree, CopyStats};
use crate::error::{Error, Result};
use crate::filters::ExclusionConfig;
use std::path::{Path, PathBuf};

/// Strategy for populating a staging directory.
pub trait SourceProvider {
    /// Human-readable description of the source, for diagnostics.
    fn describe(&self) -> String;

    /// Fills `staging` with the project content.
    fn populate(&self, staging: &Path) -> Result<CopyStats>;
}

/// Populates staging by copying a template directory tree.
#[derive(Debug, Clone)]
pub struct TemplateDirSource {
    root: PathBuf,
    exclusions: ExclusionConfig,
}

impl TemplateDirSource {
    /// Creates a source rooted at `root` with the default exclusions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclusions: ExclusionConfig::default(),
        }
    }

    /// Replaces the exclusion configuration.
    pub fn with_exclusions(mut self, exclusions: ExclusionConfig) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// The template root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceProvider for TemplateDirSource {
    fn describe(&self) -> String {
        format!("template directory {}", self.root.display())
    }

    fn populate(&self, staging: &Path) -> Result<CopyStats> {
        if !self.root.exists() {
            return Err(Error::template_not_found(self.root.display().to_string()));
        }
        if !self.root.is_dir() {
            return Err(Error::template_not_a_directory(
                self.root.display().to_string(),
            ));
        }

        copy_tree(&self.root, staging, &self.exclusions)
    }
}
