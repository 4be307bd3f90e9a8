use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tidy_fs::{Error, NormalizedPath, io};

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("pyproject.toml"));

    io::write_atomic(&path, b"[tool]\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "[tool]\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("pyproject.toml");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_text_creates_missing_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(".github").join("dependabot.yml"));

    io::write_text(&path, "version: 2\n").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "version: 2\n");
}

#[test]
fn test_no_temp_file_left_after_success() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("pyproject.toml"));

    io::write_text(&path, "content").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
}

#[cfg(unix)]
#[test]
fn test_failed_rename_cleans_temp_and_keeps_target() {
    let temp = TempDir::new().unwrap();
    // A non-empty directory cannot be replaced by a file rename.
    let target = temp.path().join("pyproject.toml");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), "x").unwrap();

    let path = NormalizedPath::new(&target);
    let result = io::write_text(&path, "new content");

    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(target.join("keep").exists());
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.toml"));

    let err = io::read_text(&path).unwrap_err();
    assert!(err.path().ends_with("missing.toml"));
}

#[test]
fn test_read_text_if_exists() {
    let temp = TempDir::new().unwrap();
    let missing = NormalizedPath::new(temp.path().join("missing.toml"));
    assert_eq!(io::read_text_if_exists(&missing).unwrap(), None);

    let present = NormalizedPath::new(temp.path().join("present.toml"));
    fs::write(present.to_native(), "a = 1\n").unwrap();
    assert_eq!(
        io::read_text_if_exists(&present).unwrap().as_deref(),
        Some("a = 1\n")
    );
}
