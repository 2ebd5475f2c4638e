//! Integration tests for the scaffold cycle.
//!
//! These exercise the full stage-and-package pipeline end-to-end on real
//! directory trees and reopen the produced zip to verify entry names and
//! contents.

use kindling_scaffold::{
    ArchiveConfig, ExclusionConfig, ScaffoldOptions, Scaffolder, TemplateDirSource,
};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Build the reference template: package.json (10 bytes) and src/index.js
/// (0 bytes).
fn create_base_template(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("package.json"), "{\"a\": \"b\"}").unwrap();
    fs::write(root.join("src/index.js"), "").unwrap();
}

fn run_scaffold(template: &Path, out_dir: &Path, name: &str) -> kindling_scaffold::ScaffoldResult {
    let source = TemplateDirSource::new(template).with_exclusions(ExclusionConfig::empty());
    let options = ScaffoldOptions::new(name).with_output_dir(out_dir);
    Scaffolder::new(Box::new(source), options).run().unwrap()
}

fn entry_names(archive_path: &Path) -> BTreeSet<String> {
    let archive = zip::ZipArchive::new(File::open(archive_path).unwrap()).unwrap();
    archive.file_names().map(String::from).collect()
}

fn entry_content(archive_path: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(File::open(archive_path).unwrap()).unwrap();
    let mut buf = Vec::new();
    archive.by_name(name).unwrap().read_to_end(&mut buf).unwrap();
    buf
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[test]
fn test_demo_cycle_yields_expected_entries() {
    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_base_template(template.path());

    let result = run_scaffold(template.path(), out.path(), "demo");

    assert_eq!(result.archive_path, out.path().join("demo.zip"));
    assert_eq!(result.file_count, 2);

    let names = entry_names(&result.archive_path);
    let expected: BTreeSet<String> = ["package.json", "src/", "src/index.js"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(names, expected);

    assert_eq!(
        entry_content(&result.archive_path, "package.json"),
        b"{\"a\": \"b\"}"
    );
    assert_eq!(entry_content(&result.archive_path, "src/index.js"), b"");
}

#[test]
fn test_cycle_is_idempotent() {
    let template = TempDir::new().unwrap();
    create_base_template(template.path());

    let out_a = TempDir::new().unwrap();
    let out_b = TempDir::new().unwrap();
    let a = run_scaffold(template.path(), out_a.path(), "demo");
    let b = run_scaffold(template.path(), out_b.path(), "demo");

    assert_eq!(entry_names(&a.archive_path), entry_names(&b.archive_path));
    for name in ["package.json", "src/index.js"] {
        assert_eq!(
            entry_content(&a.archive_path, name),
            entry_content(&b.archive_path, name)
        );
    }
}

#[test]
fn test_empty_template_yields_openable_empty_archive() {
    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let result = run_scaffold(template.path(), out.path(), "blank");

    assert_eq!(result.entry_count, 0);
    let archive = zip::ZipArchive::new(File::open(&result.archive_path).unwrap()).unwrap();
    assert_eq!(archive.len(), 0);
}

#[test]
fn test_missing_template_reports_error_and_leaves_nothing() {
    let out = TempDir::new().unwrap();
    let source = TemplateDirSource::new(out.path().join("templates/base"));
    let options = ScaffoldOptions::new("demo").with_output_dir(out.path());

    let err = Scaffolder::new(Box::new(source), options).run().unwrap_err();
    assert!(matches!(
        err,
        kindling_scaffold::Error::TemplateNotFound { .. }
    ));
    assert!(!out.path().join("demo.zip").exists());
}

#[test]
fn test_extraction_reproduces_template_tree() {
    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let extracted = TempDir::new().unwrap();
    create_base_template(template.path());
    fs::create_dir_all(template.path().join("docs/empty")).unwrap();

    let result = run_scaffold(template.path(), out.path(), "demo");

    let mut archive = zip::ZipArchive::new(File::open(&result.archive_path).unwrap()).unwrap();
    archive.extract(extracted.path()).unwrap();

    assert_eq!(
        fs::read(extracted.path().join("package.json")).unwrap(),
        fs::read(template.path().join("package.json")).unwrap()
    );
    assert!(extracted.path().join("src/index.js").is_file());
    // Empty directories round-trip through their marker entries.
    assert!(extracted.path().join("docs/empty").is_dir());
}

#[test]
fn test_custom_compression_level_still_extracts() {
    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_base_template(template.path());

    let source = TemplateDirSource::new(template.path());
    let options = ScaffoldOptions::new("demo")
        .with_output_dir(out.path())
        .with_archive_config(ArchiveConfig::new().with_compression_level(9));
    let result = Scaffolder::new(Box::new(source), options).run().unwrap();

    assert_eq!(
        entry_content(&result.archive_path, "package.json"),
        b"{\"a\": \"b\"}"
    );
}

#[cfg(unix)]
#[test]
fn test_executable_bit_survives_the_cycle() {
    use std::os::unix::fs::PermissionsExt;

    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(template.path().join("setup.sh"), "#!/bin/sh\n").unwrap();
    fs::set_permissions(
        template.path().join("setup.sh"),
        fs::Permissions::from_mode(0o755),
    )
    .unwrap();

    let result = run_scaffold(template.path(), out.path(), "demo");

    let mut archive = zip::ZipArchive::new(File::open(&result.archive_path).unwrap()).unwrap();
    let entry = archive.by_name("setup.sh").unwrap();
    assert_eq!(entry.unix_mode().map(|m| m & 0o777), Some(0o755));
}
