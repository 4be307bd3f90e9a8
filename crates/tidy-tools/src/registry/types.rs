//! Core types for the tool registry

use std::fmt;

use serde::{Deserialize, Serialize};
use tidy_content::{DesiredSection, SectionPath};

use crate::runner::RunnerKind;

/// Tool category for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    /// Code formatters (black, isort)
    Formatter,
    Linter,
    TypeChecker,
    /// Commit message and release tooling
    Commit,
    Security,
    Testing,
    /// tidycode's own settings
    Project,
}

impl ToolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Formatter => "formatter",
            ToolCategory::Linter => "linter",
            ToolCategory::TypeChecker => "type-checker",
            ToolCategory::Commit => "commit",
            ToolCategory::Security => "security",
            ToolCategory::Testing => "testing",
            ToolCategory::Project => "project",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything tidycode knows about one tool.
#[derive(Debug, Clone)]
pub struct ToolRegistration {
    /// Machine identifier (e.g., "black", "pip-audit")
    pub slug: String,
    /// Display name (e.g., "Black")
    pub name: String,
    pub description: String,
    pub category: ToolCategory,
    /// Canonical sections, merged in this order
    pub sections: Vec<(SectionPath, DesiredSection)>,
    /// How to invoke the tool, if tidycode runs it
    pub runner: Option<RunnerKind>,
}

impl ToolRegistration {
    /// Create a registration with no sections and no runner.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, category: ToolCategory) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: String::new(),
            category,
            sections: Vec::new(),
            runner: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a section (builder pattern).
    pub fn with_section(mut self, path: SectionPath, desired: DesiredSection) -> Self {
        self.sections.push((path, desired));
        self
    }

    pub fn with_runner(mut self, runner: RunnerKind) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Whether the tool contributes anything to `pyproject.toml`.
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

/// A named set of tools, expanded in member order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolGroup {
    pub slug: String,
    pub description: String,
    pub members: Vec<String>,
}

impl ToolGroup {
    pub fn new<I, S>(slug: impl Into<String>, description: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slug: slug.into(),
            description: description.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}
