//! Entry filtering for template staging.
//!
//! Patterns are matched against paths relative to the template root. The
//! default set prunes VCS metadata and regenerable dependency directories
//! that have no business inside a starter archive.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Patterns excluded from staging by default.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "**/.git",
    "**/.git/**",
    "**/node_modules",
    "**/node_modules/**",
    "**/.DS_Store",
];

/// Exclusion configuration for the staging copy.
#[derive(Debug, Clone)]
pub struct ExclusionConfig {
    /// The compiled globset for matching excluded entries
    globset: GlobSet,
}

impl ExclusionConfig {
    /// Creates an exclusion configuration from the default patterns plus
    /// optional additional patterns.
    pub fn new(additional_patterns: Vec<String>) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in DEFAULT_EXCLUDE {
            let glob =
                Glob::new(pattern).map_err(|e| Error::invalid_pattern(*pattern, e.to_string()))?;
            builder.add(glob);
        }

        for pattern in additional_patterns {
            let glob =
                Glob::new(&pattern).map_err(|e| Error::invalid_pattern(&pattern, e.to_string()))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| Error::invalid_pattern("<combined>", e.to_string()))?;

        Ok(Self { globset })
    }

    /// An exclusion configuration that matches nothing. Under this config the
    /// staging copy is an exact mirror of the template tree.
    pub fn empty() -> Self {
        Self {
            globset: GlobSet::empty(),
        }
    }

    /// Checks if a template-relative path should be excluded from staging.
    pub fn should_exclude(&self, path: &Path) -> bool {
        self.globset.is_match(path)
    }
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        // The default pattern list is static and known-valid.
        Self::new(vec![]).unwrap_or_else(|_| Self::empty())
    }
}
