//! Project context: where pyproject.toml and its neighbours live

use std::path::Path;

use tidy_fs::{NormalizedPath, ProjectFile};

/// Paths every command works against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub pyproject: NormalizedPath,
    /// Directory holding pyproject.toml
    pub root: NormalizedPath,
}

impl ProjectContext {
    pub fn new(pyproject: &Path) -> Self {
        let pyproject = NormalizedPath::new(pyproject);
        let root = pyproject
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| NormalizedPath::new("."));
        Self { pyproject, root }
    }

    pub fn file(&self, file: ProjectFile) -> NormalizedPath {
        self.root.join(file.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        let ctx = ProjectContext::new(Path::new("pyproject.toml"));
        assert_eq!(ctx.root.as_str(), ".");
        assert_eq!(
            ctx.file(ProjectFile::PreCommitConfig).as_str(),
            "./.pre-commit-config.yaml"
        );
    }

    #[test]
    fn test_nested_pyproject_sets_root() {
        let ctx = ProjectContext::new(Path::new("services/api/pyproject.toml"));
        assert_eq!(ctx.root.as_str(), "services/api");
        assert_eq!(
            ctx.file(ProjectFile::Dependabot).as_str(),
            "services/api/.github/dependabot.yml"
        );
    }
}
