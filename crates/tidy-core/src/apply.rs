//! Applying tool sections to `pyproject.toml`
//!
//! The file is read once, every requested section is merged into the
//! in-memory document in registry order, and the result is written once.
//! Any error aborts before the write, so the file on disk is either
//! untouched or fully updated.

use tidy_content::{Change, ConfigDocument, unified_diff};
use tidy_fs::NormalizedPath;
use tidy_tools::ToolRegistry;

use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Compute changes and a diff without writing
    pub dry_run: bool,
}

/// Outcome of [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Resolved tool slugs, in merge order
    pub tools: Vec<String>,
    pub changes: Vec<Change>,
    /// Unified diff of the file, empty when nothing changed
    pub diff: String,
    pub written: bool,
}

impl ApplyReport {
    pub fn is_unchanged(&self) -> bool {
        self.diff.is_empty()
    }
}

/// Merge the sections of `ids` (tools or groups) into the file at `path`.
pub fn apply<S: AsRef<str>>(
    path: &NormalizedPath,
    registry: &ToolRegistry,
    ids: &[S],
    options: ApplyOptions,
) -> Result<ApplyReport> {
    let tools = registry.resolve(ids)?;
    let mut doc = ConfigDocument::load(path)?;

    let mut changes = Vec::new();
    for tool in &tools {
        for (section, desired) in &tool.sections {
            let merged = doc.merge(section, desired)?;
            tracing::debug!(tool = %tool.slug, section = %section, changes = merged.len(), "Applied section");
            changes.extend(merged);
        }
    }

    let label = path.file_name().unwrap_or("pyproject.toml");
    let diff = unified_diff(doc.original(), &doc.render(), label);

    let written = !options.dry_run && doc.is_modified();
    if written {
        doc.dump(path)?;
        tracing::info!(path = %path, changes = changes.len(), "Updated configuration");
    } else {
        tracing::debug!(path = %path, dry_run = options.dry_run, "Nothing written");
    }

    Ok(ApplyReport {
        tools: tools.iter().map(|t| t.slug.clone()).collect(),
        changes,
        diff,
        written,
    })
}
