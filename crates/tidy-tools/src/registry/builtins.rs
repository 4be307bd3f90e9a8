//! Built-in tool registrations
//!
//! Every tool tidycode knows about is declared here, in the order it is
//! listed, applied and run.

use tidy_content::{Mapping, SectionPath};

use super::{ToolCategory, ToolGroup, ToolRegistration};
use crate::runner::RunnerKind;

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 9;

/// Tools tidycode runs for `quality` when nothing else is configured.
pub const DEFAULT_QUALITY_TOOLS: [&str; 4] = ["black", "isort", "ruff", "mypy"];

const RUFF_EXCLUDES: [&str; 29] = [
    "migrations",
    ".venv",
    "venv",
    "env",
    ".env",
    ".bzr",
    ".direnv",
    ".eggs",
    ".git",
    ".git-rewrite",
    ".hg",
    ".ipynb_checkpoints",
    ".mypy_cache",
    ".nox",
    ".pants.d",
    ".pyenv",
    ".pytest_cache",
    ".pytype",
    ".ruff_cache",
    ".svn",
    ".tox",
    ".vscode",
    "__pypackages__",
    "_build",
    "buck-out",
    "build",
    "dist",
    "node_modules",
    "site-packages",
];

/// Returns all built-in tool registrations in declared order.
pub fn builtin_registrations() -> Vec<ToolRegistration> {
    vec![
        ToolRegistration::new("tidycode", "TidyCode", ToolCategory::Project)
            .with_description("Keeps Python projects clean: format, lint, test and secure")
            .with_section(SectionPath::tool("tidycode"), tidycode_section()),
        ToolRegistration::new("black", "Black", ToolCategory::Formatter)
            .with_description("The uncompromising Python code formatter")
            .with_section(
                SectionPath::tool("black"),
                Mapping::new()
                    .with("line-length", 88)
                    .with("target-version", ["py310"])
                    .with("skip-string-normalization", false)
                    .with("preview", true),
            )
            .with_runner(RunnerKind::Black),
        ToolRegistration::new("isort", "isort", ToolCategory::Formatter)
            .with_description("Sorts imports alphabetically and by section")
            .with_section(
                SectionPath::tool("isort"),
                Mapping::new().with("profile", "black").with("line_length", 88),
            )
            .with_runner(RunnerKind::Isort),
        ToolRegistration::new("ruff", "Ruff", ToolCategory::Linter)
            .with_description("A fast Python linter, compatible with Flake8 rules")
            .with_section(SectionPath::tool("ruff"), ruff_section())
            .with_runner(RunnerKind::Ruff),
        ToolRegistration::new("mypy", "mypy", ToolCategory::TypeChecker)
            .with_description("Optional static typing for Python")
            .with_section(
                SectionPath::tool("mypy"),
                Mapping::new()
                    .with("python_version", "3.10")
                    .with("ignore_missing_imports", true)
                    .with("check_untyped_defs", true)
                    .with("disallow_untyped_defs", true)
                    .with("warn_redundant_casts", true)
                    .with("warn_unused_ignores", true),
            )
            .with_runner(RunnerKind::Mypy),
        ToolRegistration::new("commitizen", "Commitizen", ToolCategory::Commit)
            .with_description("Conventional commits, version bumps and changelogs")
            .with_section(
                SectionPath::tool("commitizen"),
                Mapping::new()
                    .with("name", "cz_conventional_commits")
                    .with("tag_format", "v$version")
                    .with("version_provider", "pep621")
                    .with("update_changelog_on_bump", true),
            )
            .with_runner(RunnerKind::Commitizen),
        ToolRegistration::new("bandit", "Bandit", ToolCategory::Security)
            .with_description("Finds common security issues in Python code")
            .with_section(
                SectionPath::tool("bandit"),
                Mapping::new()
                    .with("exclude_dirs", ["tests", ".venv", "venv", "build", "dist"])
                    .with("skips", ["B101"]),
            )
            .with_runner(RunnerKind::Bandit),
        ToolRegistration::new("pip-audit", "pip-audit", ToolCategory::Security)
            .with_description("Audits installed packages for known vulnerabilities")
            .with_runner(RunnerKind::PipAudit),
        ToolRegistration::new("coverage", "Coverage.py", ToolCategory::Testing)
            .with_description("Measures test coverage with pytest")
            .with_section(
                SectionPath::tool("coverage").child("run"),
                Mapping::new()
                    .with("source", ["."])
                    .with("branch", true)
                    .with("omit", ["tests/*", ".venv/*"]),
            )
            .with_section(
                SectionPath::tool("coverage").child("report"),
                Mapping::new()
                    .with("show_missing", true)
                    .with("skip_empty", true),
            )
            .with_runner(RunnerKind::Coverage),
    ]
}

/// Returns the built-in groups. `all` is filled in by the registry.
pub fn builtin_groups() -> Vec<ToolGroup> {
    vec![
        ToolGroup::new(
            "defaults",
            "Baseline configuration applied by `init`",
            ["tidycode", "black", "ruff", "isort"],
        ),
        ToolGroup::new("quality", "Formatters, linter and type checker", DEFAULT_QUALITY_TOOLS),
        ToolGroup::new("security", "Security scanners", ["bandit", "pip-audit"]),
    ]
}

fn tidycode_section() -> Mapping {
    Mapping::new()
        .with("target", ".")
        .with("check-only", false)
        .with("verbose", false)
        .with("tools", DEFAULT_QUALITY_TOOLS)
        .with(
            "clean",
            Mapping::new()
                .with("target", ".")
                .with(
                    "cleanable_dirs",
                    [
                        "__pycache__",
                        ".pytest_cache",
                        ".ruff_cache",
                        ".mypy_cache",
                        ".tox",
                        "build",
                        "dist",
                    ],
                )
                .with("cleanable_files", [".coverage", "coverage.xml"])
                .with("patterns", ["*.pyc", "*.log"])
                .with("excludes", ["docs", "migrations"]),
        )
}

fn ruff_section() -> Mapping {
    Mapping::new()
        .with("line-length", 88)
        .with("target-version", "py310")
        .with("exclude", RUFF_EXCLUDES)
        .with(
            "lint",
            Mapping::new()
                .with("select", ["E", "F", "W", "I"])
                .with("ignore", ["E501"])
                .with("fixable", ["ALL"]),
        )
        .with(
            "format",
            Mapping::new()
                .with("quote-style", "double")
                .with("skip-magic-trailing-comma", false)
                .with("line-ending", "auto"),
        )
}
