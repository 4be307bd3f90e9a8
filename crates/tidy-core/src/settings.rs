//! `[tool.tidycode]` settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tidy_fs::NormalizedPath;
use tidy_tools::registry::DEFAULT_QUALITY_TOOLS;

use crate::error::{Error, Result};

fn default_target() -> String {
    ".".to_string()
}

fn default_tools() -> Vec<String> {
    DEFAULT_QUALITY_TOOLS.iter().map(|s| s.to_string()).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// What `tidycode clean` removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanSettings {
    pub target: String,
    pub cleanable_dirs: Vec<String>,
    pub cleanable_files: Vec<String>,
    /// Glob patterns matched anywhere below the target
    pub patterns: Vec<String>,
    /// Paths relative to the target that are never touched
    pub excludes: Vec<String>,
}

impl Default for CleanSettings {
    fn default() -> Self {
        Self {
            target: default_target(),
            cleanable_dirs: strings(&[
                "__pycache__",
                ".pytest_cache",
                ".ruff_cache",
                ".mypy_cache",
                ".tox",
                "build",
                "dist",
            ]),
            cleanable_files: strings(&[".coverage", "coverage.xml"]),
            patterns: strings(&["*.pyc", "*.log"]),
            excludes: strings(&["docs", "migrations"]),
        }
    }
}

/// Settings read from `[tool.tidycode]` in `pyproject.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TidySettings {
    /// Path handed to the runners
    pub target: String,
    pub check_only: bool,
    pub verbose: bool,
    /// Tools run by `tidycode quality`
    pub tools: Vec<String>,
    pub clean: CleanSettings,
}

impl Default for TidySettings {
    fn default() -> Self {
        Self {
            target: default_target(),
            check_only: false,
            verbose: false,
            tools: default_tools(),
            clean: CleanSettings::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: ToolTable,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    tidycode: Option<TidySettings>,
}

impl TidySettings {
    /// Load settings from a `pyproject.toml`.
    ///
    /// A missing file or a missing `[tool.tidycode]` table yields defaults.
    pub fn load(pyproject: &NormalizedPath) -> Result<Self> {
        let Some(content) = tidy_fs::io::read_text_if_exists(pyproject)? else {
            tracing::debug!(path = %pyproject, "No pyproject.toml, using default settings");
            return Ok(Self::default());
        };
        Self::parse_from(&content, pyproject.to_native())
    }

    /// Parse settings from `pyproject.toml` text.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_from(content, "pyproject.toml")
    }

    fn parse_from(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let project: PyProject =
            toml::from_str(content).map_err(|e| Error::config(path, e.message()))?;
        Ok(project.tool.tidycode.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_when_section_missing() {
        let settings = TidySettings::parse("[project]\nname = \"demo\"\n").unwrap();
        assert_eq!(settings, TidySettings::default());
        assert_eq!(settings.tools, vec!["black", "isort", "ruff", "mypy"]);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings = TidySettings::parse(
            "[tool.tidycode]\ncheck-only = true\ntools = [\"ruff\"]\n\n[tool.tidycode.clean]\npatterns = [\"*.tmp\"]\n",
        )
        .unwrap();
        assert!(settings.check_only);
        assert_eq!(settings.tools, vec!["ruff"]);
        assert_eq!(settings.target, ".");
        assert_eq!(settings.clean.patterns, vec!["*.tmp"]);
        assert_eq!(settings.clean.excludes, vec!["docs", "migrations"]);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = TidySettings::parse("[tool.tidycode]\ncheck-only = \"yes\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { ref path, .. } if path == &PathBuf::from("pyproject.toml")));
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_load_reports_file_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        std::fs::write(&path, "[tool.tidycode]\ntools = \"black\"\n").unwrap();

        let err = TidySettings::load(&NormalizedPath::new(&path)).unwrap_err();
        match err {
            Error::Config { path: reported, .. } => {
                assert_eq!(reported, NormalizedPath::new(&path).to_native())
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
