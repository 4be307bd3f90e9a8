//! `.pre-commit-config.yaml` management
//!
//! Entries are normalized on load so every repository has a `repo`, a
//! `rev` (except `local` and `meta` repositories, which have none) and a
//! list of hook mappings. Top-level keys other than `repos` are kept in
//! their original order.

use serde_yaml::{Mapping, Value};
use tidy_fs::NormalizedPath;
use tidy_tools::HookDefinition;

use crate::error::{Error, Result};

/// Revision filled in for remote repositories that do not pin one.
pub const DEFAULT_REV: &str = "v1.0.0";

const REPOS: &str = "repos";

/// One normalized `repos:` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoEntry {
    pub repo: String,
    pub rev: Option<String>,
    pub hooks: Vec<Mapping>,
    /// Any other keys of the entry, in order
    pub extra: Mapping,
}

impl RepoEntry {
    /// Whether the repository is one of pre-commit's built-in sources.
    pub fn is_builtin_source(&self) -> bool {
        matches!(self.repo.as_str(), "local" | "meta")
    }

    pub fn hook_ids(&self) -> impl Iterator<Item = &str> {
        self.hooks
            .iter()
            .filter_map(|hook| hook.get("id").and_then(Value::as_str))
    }

    fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        map.insert("repo".into(), self.repo.clone().into());
        if let Some(rev) = &self.rev {
            map.insert("rev".into(), rev.clone().into());
        }
        map.insert(
            "hooks".into(),
            Value::Sequence(self.hooks.iter().cloned().map(Value::Mapping).collect()),
        );
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Mapping(map)
    }
}

/// A loaded pre-commit configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreCommitConfig {
    root: Mapping,
    repos: Vec<RepoEntry>,
}

impl PreCommitConfig {
    /// Load and normalize a configuration. A missing file is empty.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        match tidy_fs::io::read_text_if_exists(path)? {
            Some(content) => Self::parse(&content).map_err(|e| match e {
                Error::Config { message, .. } => Error::config(path.to_native(), message),
                Error::Yaml(source) => Error::config(path.to_native(), source.to_string()),
                other => other,
            }),
            None => Ok(Self::default()),
        }
    }

    /// Parse and normalize configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let root = match serde_yaml::from_str::<Value>(content)? {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            other => {
                return Err(Error::config(
                    ".pre-commit-config.yaml",
                    format!("expected a mapping at the top level, found {}", kind(&other)),
                ));
            }
        };

        let repos = match root.get(REPOS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(normalize_entry)
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(Error::config(
                    ".pre-commit-config.yaml",
                    format!("'repos' must be a list, found {}", kind(other)),
                ));
            }
        };

        Ok(Self { root, repos })
    }

    /// Serialize back to YAML.
    pub fn render(&self) -> Result<String> {
        let mut root = self.root.clone();
        let repos = Value::Sequence(self.repos.iter().map(RepoEntry::to_value).collect());
        root.insert(REPOS.into(), repos);
        Ok(serde_yaml::to_string(&root)?)
    }

    /// Write the configuration atomically.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        tidy_fs::io::write_text(path, &self.render()?)?;
        tracing::info!(path = %path, repos = self.repos.len(), "Saved pre-commit config");
        Ok(())
    }

    pub fn repos(&self) -> &[RepoEntry] {
        &self.repos
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Every hook id across all repositories.
    pub fn hook_ids(&self) -> Vec<&str> {
        self.repos.iter().flat_map(RepoEntry::hook_ids).collect()
    }

    pub fn contains_repo(&self, repo: &str) -> bool {
        self.repos.iter().any(|r| r.repo == repo)
    }

    /// Catalog keys whose repository is present.
    pub fn installed_keys(&self, catalog: &[HookDefinition]) -> Vec<&'static str> {
        catalog
            .iter()
            .filter(|def| self.contains_repo(&def.repo.repo))
            .map(|def| def.key)
            .collect()
    }

    /// Add a catalog entry. An existing entry for the same repository only
    /// gains the hook ids it is missing. Returns whether anything changed.
    pub fn add(&mut self, definition: &HookDefinition) -> Result<bool> {
        let hooks = definition
            .repo
            .hooks
            .iter()
            .map(|hook| match serde_yaml::to_value(hook)? {
                Value::Mapping(map) => Ok(map),
                other => Err(Error::config(
                    ".pre-commit-config.yaml",
                    format!("hook serialized to {}", kind(&other)),
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(entry) = self
            .repos
            .iter_mut()
            .find(|r| r.repo == definition.repo.repo)
        {
            let mut added = false;
            for hook in hooks {
                let id = hook.get("id").and_then(Value::as_str).unwrap_or_default();
                if !entry.hook_ids().any(|existing| existing == id) {
                    entry.hooks.push(hook);
                    added = true;
                }
            }
            tracing::debug!(key = definition.key, added, "Merged hooks into existing repo");
            return Ok(added);
        }

        self.repos.push(RepoEntry {
            repo: definition.repo.repo.clone(),
            rev: Some(definition.repo.rev.clone()),
            hooks,
            extra: Mapping::new(),
        });
        tracing::debug!(key = definition.key, "Added hook repo");
        Ok(true)
    }

    /// Drop the repository entry of a catalog definition.
    pub fn remove(&mut self, definition: &HookDefinition) -> bool {
        let before = self.repos.len();
        self.repos.retain(|r| r.repo != definition.repo.repo);
        before != self.repos.len()
    }

    /// Remove a hook by id from every repository. Returns how many were removed.
    pub fn remove_hook(&mut self, id: &str) -> usize {
        let mut removed = 0;
        for entry in &mut self.repos {
            let before = entry.hooks.len();
            entry
                .hooks
                .retain(|hook| hook.get("id").and_then(Value::as_str) != Some(id));
            removed += before - entry.hooks.len();
        }
        removed
    }
}

fn normalize_entry(entry: &Value) -> Result<RepoEntry> {
    match entry {
        Value::String(repo) => Ok(RepoEntry {
            rev: default_rev_for(repo),
            repo: repo.clone(),
            hooks: Vec::new(),
            extra: Mapping::new(),
        }),
        Value::Mapping(map) => {
            let repo = map
                .get("repo")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    Error::config(".pre-commit-config.yaml", "repository entry without 'repo'")
                })?
                .to_string();
            let rev = match map.get("rev") {
                Some(Value::String(rev)) => Some(rev.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => default_rev_for(&repo),
            };
            let hooks = match map.get("hooks") {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Mapping(single)) => vec![single.clone()],
                Some(Value::Sequence(items)) => items
                    .iter()
                    .filter_map(|item| item.as_mapping().cloned())
                    .collect(),
                Some(other) => {
                    return Err(Error::config(
                        ".pre-commit-config.yaml",
                        format!("hooks of '{repo}' must be a list, found {}", kind(other)),
                    ));
                }
            };
            let extra = map
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), Some("repo" | "rev" | "hooks")))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            Ok(RepoEntry {
                repo,
                rev,
                hooks,
                extra,
            })
        }
        other => Err(Error::config(
            ".pre-commit-config.yaml",
            format!("repository entry must be a mapping, found {}", kind(other)),
        )),
    }
}

fn default_rev_for(repo: &str) -> Option<String> {
    match repo {
        "local" | "meta" => None,
        _ => Some(DEFAULT_REV.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tidy_tools::hooks::find_hook;

    #[test]
    fn test_string_entry_is_normalized() {
        let config = PreCommitConfig::parse("repos:\n  - https://github.com/psf/black\n").unwrap();
        let entry = &config.repos()[0];
        assert_eq!(entry.repo, "https://github.com/psf/black");
        assert_eq!(entry.rev.as_deref(), Some(DEFAULT_REV));
        assert!(entry.hooks.is_empty());
    }

    #[test]
    fn test_single_hook_becomes_list() {
        let config = PreCommitConfig::parse(
            "repos:\n  - repo: https://github.com/psf/black\n    rev: 24.1.0\n    hooks:\n      id: black\n",
        )
        .unwrap();
        assert_eq!(config.hook_ids(), vec!["black"]);
        assert_eq!(config.repos()[0].rev.as_deref(), Some("24.1.0"));
    }

    #[test]
    fn test_local_repo_gets_no_rev() {
        let config = PreCommitConfig::parse(
            "repos:\n  - repo: local\n    hooks:\n      - id: pytest\n        name: pytest\n        entry: pytest\n        language: system\n",
        )
        .unwrap();
        assert_eq!(config.repos()[0].rev, None);
        assert!(!config.render().unwrap().contains("rev:"));
    }

    #[test]
    fn test_top_level_keys_are_kept() {
        let config = PreCommitConfig::parse("default_stages: [pre-commit]\nrepos: []\nfail_fast: true\n")
            .unwrap();
        let rendered = config.render().unwrap();
        let stages = rendered.find("default_stages").unwrap();
        let repos = rendered.find("repos").unwrap();
        let fail_fast = rendered.find("fail_fast").unwrap();
        assert!(stages < repos && repos < fail_fast);
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        assert!(matches!(
            PreCommitConfig::parse("- just\n- a list\n"),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_add_into_existing_repo_only_adds_missing_ids() {
        let mut config = PreCommitConfig::parse(
            "repos:\n  - repo: https://github.com/pre-commit/pre-commit-hooks\n    rev: v4.0.0\n    hooks:\n      - id: check-yaml\n",
        )
        .unwrap();
        let def = find_hook("pre_commit_hooks").unwrap();

        assert!(config.add(&def).unwrap());
        assert_eq!(config.repos().len(), 1);
        assert_eq!(config.repos()[0].rev.as_deref(), Some("v4.0.0"));
        let ids = config.hook_ids();
        assert_eq!(ids.iter().filter(|id| **id == "check-yaml").count(), 1);
        assert_eq!(ids.len(), def.repo.hooks.len());

        assert!(!config.add(&def).unwrap());
    }
}
