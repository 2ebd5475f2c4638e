//! # kindling-scaffold
//!
//! Scaffolding library for the kindling CLI. One scaffold cycle stages a
//! template directory tree into a fresh temporary location and packages that
//! location into a downloadable zip archive:
//!
//! - [`copier`] — recursive directory copy preserving structure and
//!   permission bits
//! - [`staging`] — RAII guard around the per-run staging directory
//! - [`filters`] — glob-based exclusion of entries from staging
//! - [`archive`] — zip packaging with deflate compression and directory
//!   marker entries
//! - [`provider`] — the source-provider seam that populates a staging
//!   directory
//! - [`scaffold`] — the orchestrator tying the steps together
//!
//! # Examples
//!
//! ```no_run
//! use kindling_scaffold::{Scaffolder, ScaffoldOptions, TemplateDirSource};
//!
//! # fn example() -> kindling_scaffold::Result<()> {
//! let source = TemplateDirSource::new("templates/base");
//! let options = ScaffoldOptions::new("demo");
//! let result = Scaffolder::new(Box::new(source), options).run()?;
//! println!("packaged {} files into {}", result.file_count, result.archive_path.display());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod copier;
pub mod error;
pub mod filters;
pub mod provider;
pub mod scaffold;
pub mod staging;

pub use archive::{ArchiveConfig, ArchiveResult, ZipArchiver, DEFAULT_COMPRESSION_LEVEL};
pub use copier::{copy_tree, CopyStats};
pub use error::{Error, Result};
pub use filters::{ExclusionConfig, DEFAULT_EXCLUDE};
pub use provider::{SourceProvider, TemplateDirSource};
pub use scaffold::{ScaffoldOptions, ScaffoldResult, Scaffolder};
pub use staging::StagingDir;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
