//! Zip packaging of a staged project tree.
//!
//! The archive contains one entry per filesystem entry under the source
//! root, named by its `/`-separated relative path. Directory entries carry a
//! trailing `/` in their stored name; the companion extractor relies on that
//! convention. The source root itself gets no entry, so an empty tree
//! produces a valid archive with zero entries.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Default deflate level (6 = balanced speed/ratio).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Configuration for archive creation.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Deflate level for regular file entries (1-9)
    compression_level: u32,
}

impl ArchiveConfig {
    /// Creates a configuration with the default compression level.
    pub fn new() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Sets the compression level, clamped to 1-9.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.clamp(1, 9);
        self
    }

    /// The effective compression level.
    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an archive operation.
#[derive(Debug, Clone)]
pub struct ArchiveResult {
    /// Path to the created archive
    pub archive_path: PathBuf,

    /// Size of the archive in bytes
    pub size_bytes: u64,

    /// Number of regular file entries written
    pub file_count: usize,

    /// Total entries written, directory markers included
    pub entry_count: usize,

    /// Duration of the operation in seconds
    pub duration_seconds: f64,
}

/// Writes zip archives from staged directory trees.
pub struct ZipArchiver {
    config: ArchiveConfig,
}

impl ZipArchiver {
    /// Creates a new archiver.
    pub fn new(config: ArchiveConfig) -> Self {
        Self { config }
    }

    /// Packages `source_dir` into a zip archive at `output_path`.
    ///
    /// The first failure aborts the whole operation; a partially written
    /// output file may remain on disk and must be treated as garbage by the
    /// caller.
    pub fn create(&self, source_dir: &Path, output_path: &Path) -> Result<ArchiveResult> {
        let start = Instant::now();

        let output = File::create(output_path)?;
        let mut writer = ZipWriter::new(output);

        let mut file_count = 0;
        let mut entry_count = 0;

        for entry in WalkDir::new(source_dir)
            .follow_links(false)
            .sort_by_file_name()
            .min_depth(1)
        {
            let entry = entry?;
            let rel = match entry.path().strip_prefix(source_dir) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let name = entry_name(rel);
            let options = self.entry_options(entry.path())?;

            let file_type = entry.file_type();
            if file_type.is_dir() {
                writer.add_directory(name, options)?;
                entry_count += 1;
            } else if file_type.is_file() {
                writer.start_file(name, options)?;
                let mut source = File::open(entry.path())?;
                io::copy(&mut source, &mut writer)?;
                file_count += 1;
                entry_count += 1;
            } else {
                tracing::debug!("skipping non-regular entry: {}", entry.path().display());
            }
        }

        writer.finish()?;

        let size_bytes = fs::metadata(output_path)?.len();
        tracing::debug!(
            "wrote {} entries ({} files, {} bytes) to {}",
            entry_count,
            file_count,
            size_bytes,
            output_path.display()
        );

        Ok(ArchiveResult {
            archive_path: output_path.to_path_buf(),
            size_bytes,
            file_count,
            entry_count,
            duration_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Entry options carrying the compression level and the source entry's
    /// unix permission bits.
    #[cfg(unix)]
    fn entry_options(&self, path: &Path) -> Result<SimpleFileOptions> {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(path).map_err(Error::Io)?.permissions().mode();
        Ok(SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.config.compression_level as i64))
            .unix_permissions(mode))
    }

    #[cfg(not(unix))]
    fn entry_options(&self, _path: &Path) -> Result<SimpleFileOptions> {
        Ok(SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.config.compression_level as i64)))
    }
}

/// Stored entry name for a source-relative path, `/`-separated regardless of
/// the host separator.
fn entry_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
