//! Tool registry storage

use tidy_content::{DesiredSection, SectionPath};

use super::{ToolCategory, ToolGroup, ToolRegistration};
use crate::error::{Error, Result};

/// Name of the group that expands to every registered tool.
pub const ALL_GROUP: &str = "all";

/// Central registry of tools and groups.
///
/// Iteration follows registration order, which is also the order in which
/// sections are merged and tools are run.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolRegistration>,
    groups: Vec<ToolGroup>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with all built-in tools and groups.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for reg in super::builtins::builtin_registrations() {
            registry.register(reg);
        }
        for group in super::builtins::builtin_groups() {
            registry.register_group(group);
        }
        registry
    }

    /// Register a tool, replacing one with the same slug in place.
    pub fn register(&mut self, reg: ToolRegistration) {
        match self.tools.iter_mut().find(|t| t.slug == reg.slug) {
            Some(existing) => *existing = reg,
            None => self.tools.push(reg),
        }
    }

    /// Register a group, replacing one with the same slug in place.
    pub fn register_group(&mut self, group: ToolGroup) {
        match self.groups.iter_mut().find(|g| g.slug == group.slug) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    /// Get a registration by slug.
    pub fn get(&self, slug: &str) -> Option<&ToolRegistration> {
        self.tools.iter().find(|t| t.slug == slug)
    }

    pub fn group(&self, slug: &str) -> Option<&ToolGroup> {
        self.groups.iter().find(|g| g.slug == slug)
    }

    /// Check if a tool or group is registered.
    pub fn contains(&self, id: &str) -> bool {
        id == ALL_GROUP || self.get(id).is_some() || self.group(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool slugs in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.slug.as_str()).collect()
    }

    pub fn by_category(&self, category: ToolCategory) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.slug.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolRegistration> {
        self.tools.iter()
    }

    /// Registered groups, followed by the implicit `all` group.
    pub fn groups(&self) -> Vec<ToolGroup> {
        let mut groups = self.groups.clone();
        if self.group(ALL_GROUP).is_none() {
            groups.push(ToolGroup::new(ALL_GROUP, "Every registered tool", self.list()));
        }
        groups
    }

    /// Expand tool and group ids into registrations.
    ///
    /// Groups expand to their members; each tool appears once, at its
    /// first occurrence.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&ToolRegistration>> {
        let mut resolved: Vec<&ToolRegistration> = Vec::new();
        for id in ids {
            for reg in self.expand(id.as_ref())? {
                if resolved.iter().any(|r| r.slug == reg.slug) {
                    tracing::debug!(tool = %reg.slug, "Skipping duplicate tool");
                } else {
                    resolved.push(reg);
                }
            }
        }
        Ok(resolved)
    }

    /// The sections a tool or group contributes, in merge order.
    pub fn sections_for(&self, id: &str) -> Result<Vec<(SectionPath, DesiredSection)>> {
        Ok(self
            .expand(id)?
            .into_iter()
            .flat_map(|reg| reg.sections.iter().cloned())
            .collect())
    }

    fn expand(&self, id: &str) -> Result<Vec<&ToolRegistration>> {
        if let Some(reg) = self.get(id) {
            return Ok(vec![reg]);
        }
        if id == ALL_GROUP && self.group(ALL_GROUP).is_none() {
            tracing::debug!(group = ALL_GROUP, count = self.tools.len(), "Expanding group");
            return Ok(self.tools.iter().collect());
        }
        let group = self.group(id).ok_or_else(|| Error::UnknownTool {
            name: id.to_string(),
        })?;
        tracing::debug!(group = %group.slug, members = ?group.members, "Expanding group");
        group
            .members
            .iter()
            .map(|member| {
                self.get(member).ok_or_else(|| Error::UnknownTool {
                    name: member.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reg(slug: &str, category: ToolCategory) -> ToolRegistration {
        ToolRegistration::new(slug, slug.to_uppercase(), category)
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(make_reg("black", ToolCategory::Formatter));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("black"));
        assert!(registry.get("black").is_some());
        assert!(!registry.contains("unknown"));
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(make_reg("zed", ToolCategory::Linter));
        registry.register(make_reg("alpha", ToolCategory::Linter));
        registry.register(make_reg("mid", ToolCategory::Linter));

        assert_eq!(registry.list(), vec!["zed", "alpha", "mid"]);
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(make_reg("a", ToolCategory::Linter));
        registry.register(make_reg("b", ToolCategory::Linter));
        registry.register(make_reg("a", ToolCategory::Security));

        assert_eq!(registry.list(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().category, ToolCategory::Security);
    }

    #[test]
    fn test_by_category() {
        let registry = ToolRegistry::with_builtins();
        assert_eq!(
            registry.by_category(ToolCategory::Formatter),
            vec!["black", "isort"]
        );
        assert_eq!(
            registry.by_category(ToolCategory::Security),
            vec!["bandit", "pip-audit"]
        );
    }

    #[test]
    fn test_group_with_missing_member_is_unknown_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(make_reg("a", ToolCategory::Linter));
        registry.register_group(ToolGroup::new("broken", "", ["a", "ghost"]));

        let err = registry.resolve(&["broken"]).unwrap_err();
        assert!(matches!(err, Error::UnknownTool { ref name } if name == "ghost"));
    }

    #[test]
    fn test_groups_include_all() {
        let registry = ToolRegistry::with_builtins();
        let groups = registry.groups();
        let all = groups.iter().find(|g| g.slug == ALL_GROUP).unwrap();
        assert_eq!(all.members.len(), registry.len());
    }
}
