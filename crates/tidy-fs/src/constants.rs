//! Well-known project files tidycode reads and writes.

use std::path::Path;

/// Configuration files managed in a Python project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFile {
    /// `pyproject.toml`, home of the `[tool.*]` sections
    PyProject,
    /// `.pre-commit-config.yaml`
    PreCommitConfig,
    /// `.github/dependabot.yml`
    Dependabot,
}

impl ProjectFile {
    /// Get the path relative to the project root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PyProject => "pyproject.toml",
            Self::PreCommitConfig => ".pre-commit-config.yaml",
            Self::Dependabot => ".github/dependabot.yml",
        }
    }
}

impl AsRef<Path> for ProjectFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
