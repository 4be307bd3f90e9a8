//! Tests for dependabot scaffolding

use std::fs;

use tempfile::TempDir;
use tidy_core::setup_dependabot;
use tidy_fs::NormalizedPath;

#[test]
fn test_creates_file_and_parent_directory() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(".github/dependabot.yml"));

    assert!(setup_dependabot(&path).unwrap());

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert!(content.contains("version: 2"));
    assert!(content.contains("package-ecosystem: pip"));
    assert!(content.contains("package-ecosystem: github-actions"));
}

#[test]
fn test_existing_file_is_left_alone() {
    let temp = TempDir::new().unwrap();
    let native = temp.path().join(".github/dependabot.yml");
    fs::create_dir_all(native.parent().unwrap()).unwrap();
    fs::write(&native, "version: 2\nupdates: []").unwrap();

    assert!(!setup_dependabot(&NormalizedPath::new(&native)).unwrap());
    assert_eq!(fs::read_to_string(&native).unwrap(), "version: 2\nupdates: []");
}
