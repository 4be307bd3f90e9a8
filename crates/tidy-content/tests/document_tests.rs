use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use tidy_content::{ConfigDocument, ConfigValue, Error, Mapping, SectionPath};
use tidy_fs::NormalizedPath;

const PYPROJECT: &str = "\
[project]
name = \"demo\"

[tool.black]
line-length = 88

[tool.ruff]
line-length = 88

[tool.ruff.lint]
select = [\"E\", \"F\"]

[[tool.mypy.overrides]]
module = \"tests.*\"
";

fn path(input: &str) -> SectionPath {
    SectionPath::parse(input).unwrap()
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = NormalizedPath::new(dir.path().join("pyproject.toml"));

    let doc = ConfigDocument::load(&file).unwrap();
    assert!(doc.is_empty());
    assert!(!doc.is_modified());
    assert_eq!(doc.origin(), file.as_str());
}

#[test]
fn test_load_malformed_file_names_it() {
    let dir = TempDir::new().unwrap();
    let file = NormalizedPath::new(dir.path().join("pyproject.toml"));
    std::fs::write(file.to_native(), "[tool\nbroken").unwrap();

    let err = ConfigDocument::load(&file).unwrap_err();
    assert!(matches!(err, Error::ParseError { .. }));
    assert!(err.to_string().contains("pyproject.toml"));
}

#[test]
fn test_round_trip_is_byte_identical() {
    let doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();
    assert_eq!(doc.render(), PYPROJECT);
    assert!(!doc.is_modified());
}

#[test]
fn test_dump_then_load() {
    let dir = TempDir::new().unwrap();
    let file = NormalizedPath::new(dir.path().join("pyproject.toml"));

    let mut doc = ConfigDocument::load(&file).unwrap();
    doc.merge(&path("tool.isort"), &Mapping::new().with("profile", "black"))
        .unwrap();
    assert!(doc.is_modified());
    doc.dump(&file).unwrap();

    let reloaded = ConfigDocument::load(&file).unwrap();
    assert_eq!(reloaded.render(), doc.render());
    assert!(!reloaded.is_modified());
}

#[test]
fn test_list_sections() {
    let doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();
    assert_eq!(
        doc.list_sections(),
        vec![
            "project",
            "tool",
            "tool.black",
            "tool.ruff",
            "tool.ruff.lint",
            "tool.mypy",
            "tool.mypy.overrides",
        ]
    );
}

#[test]
fn test_list_sections_skips_dotted_keys() {
    let doc = ConfigDocument::parse("[tool]\nblack.line-length = 88\n", "x").unwrap();
    assert_eq!(doc.list_sections(), vec!["tool"]);
}

#[test]
fn test_section_json() {
    let doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();
    let ruff = doc.section_json(&path("tool.ruff")).unwrap();
    assert_eq!(
        ruff,
        json!({ "line-length": 88, "lint": { "select": ["E", "F"] } })
    );

    let err = doc.section_json(&path("tool.pylint")).unwrap_err();
    assert!(matches!(err, Error::SectionNotFound { .. }));
}

#[test]
fn test_get_and_contains() {
    let doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();
    assert!(doc.contains(&path("tool.ruff.lint.select")));
    assert!(!doc.contains(&path("tool.ruff.format")));
    let length = doc.get(&path("tool.black.line-length")).unwrap();
    assert_eq!(length.as_integer(), Some(88));
}

#[test]
fn test_remove_section() {
    let mut doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();
    doc.remove_section(&path("tool.ruff")).unwrap();

    assert!(!doc.contains(&path("tool.ruff")));
    assert!(doc.contains(&path("tool.black")));
    assert!(!doc.render().contains("[tool.ruff"));
}

#[test]
fn test_remove_missing_section() {
    let mut doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();
    let err = doc.remove_section(&path("tool.pylint")).unwrap_err();
    assert!(matches!(err, Error::SectionNotFound { ref path } if path == "tool.pylint"));

    let err = doc.remove_section(&path("nothing.here")).unwrap_err();
    assert!(matches!(err, Error::SectionNotFound { .. }));
    assert_eq!(doc.render(), PYPROJECT);
}

#[test]
fn test_set_key_creates_and_overwrites() {
    let mut doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();

    let changes = doc
        .set_key(&path("tool.black.line-length"), ConfigValue::from(100))
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert!(doc.render().contains("line-length = 100"));

    doc.set_key(
        &path("tool.pylint.disable"),
        ConfigValue::parse_literal("[\"C0114\"]"),
    )
    .unwrap();
    assert_eq!(
        doc.section_json(&path("tool.pylint")).unwrap(),
        json!({ "disable": ["C0114"] })
    );
}

#[test]
fn test_set_key_into_scalar_fails() {
    let mut doc = ConfigDocument::parse(PYPROJECT, "pyproject.toml").unwrap();
    let err = doc
        .set_key(&path("project.name.first"), ConfigValue::from("x"))
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(doc.render(), PYPROJECT);
}
