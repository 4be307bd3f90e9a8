//! Tests for the clean task

use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tidy_core::clean::{ItemKind, ItemStatus};
use tidy_core::{CleanOptions, CleanSettings, run_clean};

/// A small Python project with caches, artefacts and things to keep.
fn project() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("__pycache__/mod.cpython-312.pyc")
        .write_str("")
        .unwrap();
    temp.child(".pytest_cache/v/cache/lastfailed")
        .write_str("{}")
        .unwrap();
    temp.child("dist/demo-0.1.0.tar.gz").write_str("").unwrap();
    temp.child(".coverage").write_str("").unwrap();
    temp.child("src/demo/core.py").write_str("x = 1\n").unwrap();
    temp.child("src/demo/core.pyc").write_str("").unwrap();
    temp.child("src/demo/run.log").write_str("").unwrap();
    temp.child("docs/build.log").write_str("").unwrap();
    temp.child("migrations/0001.pyc").write_str("").unwrap();
    temp
}

fn options(temp: &assert_fs::TempDir, dry_run: bool) -> CleanOptions {
    CleanOptions {
        target: Some(temp.path().to_path_buf()),
        dry_run,
        excludes: None,
    }
}

#[test]
fn test_clean_removes_configured_and_matching_entries() {
    let temp = project();

    let report = run_clean(&CleanSettings::default(), &options(&temp, false)).unwrap();

    temp.child("__pycache__").assert(predicate::path::missing());
    temp.child(".pytest_cache").assert(predicate::path::missing());
    temp.child("dist").assert(predicate::path::missing());
    temp.child(".coverage").assert(predicate::path::missing());
    temp.child("src/demo/core.pyc").assert(predicate::path::missing());
    temp.child("src/demo/run.log").assert(predicate::path::missing());
    temp.child("src/demo/core.py").assert(predicate::path::exists());

    // Excluded directories are left alone
    temp.child("docs/build.log").assert(predicate::path::exists());
    temp.child("migrations/0001.pyc").assert(predicate::path::exists());

    assert_eq!(report.totals.errors, 0);
    assert_eq!(report.removed_directories, 3);
    assert_eq!(report.removed_files, 3);
    assert!(report.items.iter().all(|item| item.status == ItemStatus::Removed));
}

#[test]
fn test_dry_run_deletes_nothing() {
    let temp = project();

    let report = run_clean(&CleanSettings::default(), &options(&temp, true)).unwrap();

    temp.child("__pycache__").assert(predicate::path::is_dir());
    temp.child(".coverage").assert(predicate::path::exists());
    temp.child("src/demo/core.pyc").assert(predicate::path::exists());
    assert!(report.dry_run);
    assert_eq!(report.totals.removed, 6);
    assert!(report.items.iter().all(|item| item.status == ItemStatus::DryRun));
}

#[test]
fn test_contents_of_scheduled_directory_are_not_listed_twice() {
    let temp = project();

    let report = run_clean(&CleanSettings::default(), &options(&temp, true)).unwrap();

    // __pycache__/mod.cpython-312.pyc goes with its directory
    assert!(
        !report
            .items
            .iter()
            .any(|item| item.path.starts_with("__pycache__/"))
    );
    let patterns: Vec<&str> = report
        .items
        .iter()
        .filter(|item| item.kind == ItemKind::Pattern)
        .map(|item| item.path.as_str())
        .collect();
    assert_eq!(patterns, vec!["src/demo/core.pyc", "src/demo/run.log"]);
}

#[test]
fn test_absent_entries_are_skipped() {
    let temp = project();

    let report = run_clean(&CleanSettings::default(), &options(&temp, true)).unwrap();

    for absent in [".ruff_cache", ".mypy_cache", ".tox", "build", "coverage.xml"] {
        assert!(report.skipped.iter().any(|s| s == absent), "{absent} not skipped");
    }
    assert_eq!(report.totals.skipped, 5);
    assert_eq!(
        report.totals.processed,
        report.totals.removed + report.totals.skipped
    );
}

#[test]
fn test_excludes_override_from_options() {
    let temp = project();
    let mut opts = options(&temp, false);
    opts.excludes = Some(vec!["dist".to_string(), "./src/".to_string()]);

    let report = run_clean(&CleanSettings::default(), &opts).unwrap();

    temp.child("dist/demo-0.1.0.tar.gz")
        .assert(predicate::path::exists());
    temp.child("src/demo/core.pyc").assert(predicate::path::exists());
    // docs is no longer excluded
    temp.child("docs/build.log").assert(predicate::path::missing());
    assert_eq!(report.excludes, vec!["dist", "src"]);
}

#[test]
fn test_report_serializes_to_json() {
    let temp = project();

    let report = run_clean(&CleanSettings::default(), &options(&temp, true)).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["dry_run"], true);
    assert_eq!(json["totals"]["removed"], 6);
    assert_eq!(json["items"][0]["kind"], "directory");
    assert_eq!(json["items"][0]["status"], "dry_run");
    assert!(json["items"][0].get("error").is_none());
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let temp = project();
    let settings = CleanSettings {
        patterns: vec!["[".to_string()],
        ..CleanSettings::default()
    };

    assert!(run_clean(&settings, &options(&temp, true)).is_err());
}

#[test]
fn test_missing_target_is_an_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let opts = CleanOptions {
        target: Some(temp.path().join("nope")),
        ..CleanOptions::default()
    };

    assert!(run_clean(&CleanSettings::default(), &opts).is_err());
}
