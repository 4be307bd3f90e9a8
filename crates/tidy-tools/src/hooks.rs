//! Pre-commit hook catalog
//!
//! Each entry is one `repos:` item of `.pre-commit-config.yaml`, keyed by a
//! short name that the `hooks add/remove` commands accept.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hooks installed by `hooks init --minimal`.
pub const MINIMAL_HOOKS: [&str; 3] = ["pre_commit_hooks", "format_black", "linting"];

/// A single hook inside a repository entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<String>,
}

impl HookSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            args: Vec::new(),
            stages: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stages<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages = stages.into_iter().map(Into::into).collect();
        self
    }
}

/// A `repos:` entry: repository URL, pinned revision and its hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookRepo {
    pub repo: String,
    pub rev: String,
    pub hooks: Vec<HookSpec>,
}

/// A named catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookDefinition {
    pub key: &'static str,
    pub description: &'static str,
    pub repo: HookRepo,
}

impl HookDefinition {
    fn new(
        key: &'static str,
        description: &'static str,
        repo: &str,
        rev: &str,
        hooks: Vec<HookSpec>,
    ) -> Self {
        Self {
            key,
            description,
            repo: HookRepo {
                repo: repo.to_string(),
                rev: rev.to_string(),
                hooks,
            },
        }
    }

    pub fn hook_ids(&self) -> impl Iterator<Item = &str> {
        self.repo.hooks.iter().map(|h| h.id.as_str())
    }
}

/// Every hook tidycode can install, in display order.
pub fn hook_catalog() -> Vec<HookDefinition> {
    vec![
        HookDefinition::new(
            "pre_commit_hooks",
            "Whitespace, end-of-file, YAML/TOML syntax and large file checks",
            "https://github.com/pre-commit/pre-commit-hooks",
            "v5.0.0",
            vec![
                HookSpec::new("trailing-whitespace"),
                HookSpec::new("end-of-file-fixer"),
                HookSpec::new("check-yaml"),
                HookSpec::new("check-toml"),
                HookSpec::new("check-added-large-files"),
            ],
        ),
        HookDefinition::new(
            "format_black",
            "Format code with black",
            "https://github.com/psf/black",
            "25.1.0",
            vec![HookSpec::new("black")],
        ),
        HookDefinition::new(
            "format_isort",
            "Sort imports with isort",
            "https://github.com/pycqa/isort",
            "6.0.1",
            vec![HookSpec::new("isort")],
        ),
        HookDefinition::new(
            "linting",
            "Lint with ruff and apply safe fixes",
            "https://github.com/astral-sh/ruff-pre-commit",
            "v0.11.2",
            vec![HookSpec::new("ruff").with_args(["--fix"])],
        ),
        HookDefinition::new(
            "typing",
            "Type-check with mypy",
            "https://github.com/pre-commit/mirrors-mypy",
            "v1.15.0",
            vec![HookSpec::new("mypy")],
        ),
        HookDefinition::new(
            "commitizen",
            "Check commit messages follow conventional commits",
            "https://github.com/commitizen-tools/commitizen",
            "v4.4.1",
            vec![HookSpec::new("commitizen").with_stages(["commit-msg"])],
        ),
        HookDefinition::new(
            "security",
            "Scan for security issues with bandit",
            "https://github.com/PyCQA/bandit",
            "1.8.3",
            vec![HookSpec::new("bandit").with_args(["-c", "pyproject.toml"])],
        ),
    ]
}

/// Look up a catalog entry by key.
pub fn find_hook(key: &str) -> Result<HookDefinition> {
    hook_catalog()
        .into_iter()
        .find(|h| h.key == key)
        .ok_or_else(|| Error::UnknownHook {
            key: key.to_string(),
        })
}
