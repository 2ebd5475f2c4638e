//! Recursive directory copy for template staging.
//!
//! Copies a source tree to a destination root, preserving structure and unix
//! permission bits. Each entry's destination is its source path relative to
//! the source root joined onto the destination root; that relative-path
//! preservation is the contract the archive step depends on.

use crate::error::{Error, Result};
use crate::filters::ExclusionConfig;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Counts of what a copy produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files copied
    pub files: usize,

    /// Directories created under the destination root
    pub dirs: usize,

    /// Total bytes of file content copied
    pub bytes: u64,
}

/// Recursively copies `source` into `dest`, pruning entries matched by
/// `exclusions`.
///
/// Traversal is pre-order depth-first with entries sorted by file name, so a
/// directory is always created before its contents are copied. The first
/// error encountered aborts the copy; the destination is left as-is.
pub fn copy_tree(source: &Path, dest: &Path, exclusions: &ExclusionConfig) -> Result<CopyStats> {
    fs::create_dir_all(dest).map_err(|e| Error::copy(dest.display().to_string(), e))?;

    let mut stats = CopyStats::default();

    let walker = WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let rel = entry.path().strip_prefix(source).unwrap_or(entry.path());
            !exclusions.should_exclude(rel)
        });

    for entry in walker {
        let entry = entry?;
        let rel = match entry.path().strip_prefix(source) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target = dest.join(rel);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| Error::copy(target.display().to_string(), e))?;
            copy_permissions(entry.path(), &target)?;
            stats.dirs += 1;
        } else if file_type.is_file() {
            stats.bytes += copy_file(entry.path(), &target)?;
            stats.files += 1;
        } else {
            // Symlinks and special files are not part of the template contract.
            tracing::debug!("skipping non-regular entry: {}", entry.path().display());
        }
    }

    Ok(stats)
}

/// Copies a single file, reapplying the source's permission bits after the
/// content copy.
fn copy_file(source: &Path, dest: &Path) -> Result<u64> {
    let mut src = File::open(source).map_err(|e| Error::copy(source.display().to_string(), e))?;
    let mut dst = File::create(dest).map_err(|e| Error::copy(dest.display().to_string(), e))?;

    let bytes =
        io::copy(&mut src, &mut dst).map_err(|e| Error::copy(dest.display().to_string(), e))?;

    copy_permissions(source, dest)?;

    Ok(bytes)
}

#[cfg(unix)]
fn copy_permissions(source: &Path, dest: &Path) -> Result<()> {
    let metadata =
        fs::metadata(source).map_err(|e| Error::copy(source.display().to_string(), e))?;
    fs::set_permissions(dest, metadata.permissions())
        .map_err(|e| Error::copy(dest.display().to_string(), e))
}

#[cfg(not(unix))]
fn copy_permissions(_source: &Path, _dest: &Path) -> Result<()> {
    Ok(())
}
