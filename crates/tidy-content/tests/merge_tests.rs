use pretty_assertions::assert_eq;
use tidy_content::{ChangeKind, ConfigDocument, Error, Mapping, SectionPath};

fn path(input: &str) -> SectionPath {
    SectionPath::parse(input).unwrap()
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

#[test]
fn test_merge_into_empty_document_creates_tables() {
    let mut doc = ConfigDocument::new();
    let desired = Mapping::new().with("line-length", 88);

    let changes = doc.merge(&path("tool.formatter"), &desired).unwrap();

    assert_eq!(
        non_blank_lines(&doc.render()),
        vec!["[tool]", "[tool.formatter]", "line-length = 88"]
    );
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Added);
    assert_eq!(changes[0].path, "tool.formatter.line-length");
}

#[test]
fn test_merge_overwrites_in_place_and_leaves_neighbours() {
    let source = "\
[tool.formatter]
line-length = 100

[tool.other]
keep = \"me\"
";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();
    let desired = Mapping::new().with("line-length", 88);

    let changes = doc.merge(&path("tool.formatter"), &desired).unwrap();

    let expected = "\
[tool.formatter]
line-length = 88

[tool.other]
keep = \"me\"
";
    assert_eq!(doc.render(), expected);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Edited);
    assert_eq!(changes[0].old.as_deref(), Some("100"));
    assert_eq!(changes[0].new, "88");
}

#[test]
fn test_merge_into_scalar_is_type_mismatch_and_leaves_document() {
    let source = "[tool]\ntypechecker = \"mypy\"\n";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();
    let desired = Mapping::new().with("strict", true);

    let err = doc.merge(&path("tool.typechecker"), &desired).unwrap_err();

    match err {
        Error::TypeMismatch { path, found, .. } => {
            assert_eq!(path, "tool.typechecker");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(doc.render(), source);
    assert!(!doc.is_modified());
}

#[test]
fn test_failed_nested_merge_rolls_back_earlier_keys() {
    let source = "[tool.ruff]\nlint = 1\n";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();
    let desired = Mapping::new()
        .with("line-length", 88)
        .with("lint", Mapping::new().with("select", ["E"]));

    let err = doc.merge(&path("tool.ruff"), &desired).unwrap_err();

    assert!(matches!(err, Error::TypeMismatch { ref path, .. } if path == "tool.ruff.lint"));
    assert_eq!(doc.render(), source);
}

#[test]
fn test_leaf_over_table_is_type_mismatch() {
    let source = "[tool.ruff.lint]\nselect = [\"E\"]\n";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();
    let desired = Mapping::new().with("lint", "all");

    let err = doc.merge(&path("tool.ruff"), &desired).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { ref found, .. } if found == "table"));
}

#[test]
fn test_two_tools_in_one_document_keep_request_order() {
    let mut doc = ConfigDocument::new();
    doc.merge(&path("tool.black"), &Mapping::new().with("line-length", 88))
        .unwrap();
    doc.merge(&path("tool.isort"), &Mapping::new().with("profile", "black"))
        .unwrap();

    let rendered = doc.render();
    let black = rendered.find("[tool.black]").unwrap();
    let isort = rendered.find("[tool.isort]").unwrap();
    assert!(black < isort);
}

#[test]
fn test_second_merge_is_a_no_op() {
    let mut doc = ConfigDocument::new();
    let desired = Mapping::new()
        .with("line-length", 88)
        .with("target-version", ["py310"])
        .with("lint", Mapping::new().with("select", ["E", "F"]));

    let first = doc.merge(&path("tool.ruff"), &desired).unwrap();
    let after_first = doc.render();
    let second = doc.merge(&path("tool.ruff"), &desired).unwrap();

    assert_eq!(first.len(), 3);
    assert!(second.is_empty());
    assert_eq!(doc.render(), after_first);
}

#[test]
fn test_unmentioned_keys_survive() {
    let source = "\
[tool.black]
custom = \"keep\"
line-length = 120
";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();
    doc.merge(
        &path("tool.black"),
        &Mapping::new().with("line-length", 88).with("preview", true),
    )
    .unwrap();

    let expected = "\
[tool.black]
custom = \"keep\"
line-length = 88
preview = true
";
    assert_eq!(doc.render(), expected);
}

#[test]
fn test_comments_are_preserved() {
    let source = "\
# project settings
[project]
name = \"demo\" # the name

[tool.black]
line-length = 100 # wide screens
";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();
    doc.merge(&path("tool.black"), &Mapping::new().with("line-length", 88))
        .unwrap();

    let rendered = doc.render();
    assert!(rendered.starts_with("# project settings\n[project]\nname = \"demo\" # the name\n"));
    assert!(rendered.contains("line-length = 88 # wide screens"));
}

#[test]
fn test_new_table_lands_after_its_siblings() {
    let source = "\
[tool.black]
line-length = 88

[other]
x = 1
";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();
    doc.merge(&path("tool.isort"), &Mapping::new().with("profile", "black"))
        .unwrap();

    let rendered = doc.render();
    assert!(rendered.starts_with("[tool.black]\nline-length = 88\n"));
    let isort = rendered.find("[tool.isort]").unwrap();
    let other = rendered.find("[other]").unwrap();
    assert!(isort < other);
}

#[test]
fn test_merge_into_inline_table() {
    let source = "[tool]\nblack = { line-length = 100 }\n";
    let mut doc = ConfigDocument::parse(source, "pyproject.toml").unwrap();

    let changes = doc
        .merge(
            &path("tool.black"),
            &Mapping::new().with("line-length", 88).with("preview", true),
        )
        .unwrap();

    assert_eq!(changes.len(), 2);
    let rendered = doc.render();
    assert!(rendered.contains("black = {"));
    assert!(rendered.contains("line-length = 88"));
    assert!(rendered.contains("preview = true"));
    assert!(!rendered.contains("[tool.black]"));
}

#[test]
fn test_nested_mapping_becomes_subtable() {
    let mut doc = ConfigDocument::new();
    doc.merge(
        &path("tool.ruff"),
        &Mapping::new()
            .with("line-length", 88)
            .with("lint", Mapping::new().with("select", ["E"])),
    )
    .unwrap();

    let lines = non_blank_lines(&doc.render())
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "[tool]",
            "[tool.ruff]",
            "line-length = 88",
            "[tool.ruff.lint]",
            "select = [\"E\"]",
        ]
    );
}

#[test]
fn test_empty_desired_creates_nothing() {
    let mut doc = ConfigDocument::new();
    let changes = doc.merge(&path("tool.empty"), &Mapping::new()).unwrap();
    assert!(changes.is_empty());
    assert!(doc.is_empty());
    assert_eq!(doc.render(), "");
}

#[test]
fn test_empty_desired_still_checks_existing_path() {
    let mut doc = ConfigDocument::parse("[tool]\nempty = 3\n", "pyproject.toml").unwrap();
    let err = doc.merge(&path("tool.empty"), &Mapping::new()).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_sequence_over_scalar_is_replaced() {
    let mut doc = ConfigDocument::parse("[tool.black]\ntarget-version = \"py38\"\n", "x").unwrap();
    let changes = doc
        .merge(
            &path("tool.black"),
            &Mapping::new().with("target-version", ["py310"]),
        )
        .unwrap();
    assert_eq!(changes[0].kind, ChangeKind::Edited);
    assert_eq!(doc.render(), "[tool.black]\ntarget-version = [\"py310\"]\n");
}
