//! Removal of caches and build artefacts
//!
//! Three sources are considered, in order: the configured directories, the
//! configured files (both relative to the target) and glob patterns matched
//! anywhere below the target. A pattern containing `/` is matched against
//! the path relative to the target, otherwise against the file name.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::Result;
use crate::settings::CleanSettings;

#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Overrides the configured target
    pub target: Option<PathBuf>,
    pub dry_run: bool,
    /// Overrides the configured excludes
    pub excludes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Directory,
    File,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Removed,
    DryRun,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanItem {
    /// Relative to the target, `/`-separated
    pub path: String,
    pub kind: ItemKind,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanTotals {
    pub processed: usize,
    pub removed: usize,
    pub skipped: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub target: String,
    pub dry_run: bool,
    pub excludes: Vec<String>,
    pub totals: CleanTotals,
    pub removed_directories: usize,
    pub removed_files: usize,
    pub items: Vec<CleanItem>,
    /// Configured entries that were excluded or absent
    pub skipped: Vec<String>,
}

struct Candidate {
    path: PathBuf,
    rel: String,
    kind: ItemKind,
}

/// Remove (or with `dry_run`, list) everything the settings name.
pub fn run_clean(settings: &CleanSettings, options: &CleanOptions) -> Result<CleanReport> {
    let requested = options
        .target
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.target));
    let target =
        dunce::canonicalize(&requested).map_err(|e| tidy_fs::Error::io(&requested, e))?;

    let excludes: Vec<String> = options
        .excludes
        .as_deref()
        .unwrap_or(settings.excludes.as_slice())
        .iter()
        .map(|e| normalize_rel(e))
        .filter(|e| !e.is_empty())
        .collect();

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();

    let configured = settings
        .cleanable_dirs
        .iter()
        .map(|d| (d, ItemKind::Directory))
        .chain(settings.cleanable_files.iter().map(|f| (f, ItemKind::File)));
    for (entry, kind) in configured {
        let rel = normalize_rel(entry);
        let path = target.join(&rel);
        if is_excluded(&rel, &excludes) || !path.exists() {
            tracing::debug!(path = %rel, "Skipping configured entry");
            skipped.push(rel);
            continue;
        }
        candidates.push(Candidate { path, rel, kind });
    }

    let matchers = PatternMatchers::new(&settings.patterns)?;
    if !matchers.is_empty() {
        collect_pattern_matches(&target, &matchers, &excludes, &mut candidates);
    }

    let mut items = Vec::with_capacity(candidates.len());
    let mut removed_directories = 0;
    let mut removed_files = 0;
    let mut errors = 0;

    for candidate in candidates {
        let is_dir = candidate.path.is_dir();
        let outcome = if options.dry_run {
            Ok(ItemStatus::DryRun)
        } else if is_dir {
            fs::remove_dir_all(&candidate.path).map(|()| ItemStatus::Removed)
        } else {
            fs::remove_file(&candidate.path).map(|()| ItemStatus::Removed)
        };

        let item = match outcome {
            Ok(status) => {
                if is_dir {
                    removed_directories += 1;
                } else {
                    removed_files += 1;
                }
                tracing::debug!(path = %candidate.rel, dry_run = options.dry_run, "Cleaned");
                CleanItem {
                    path: candidate.rel,
                    kind: candidate.kind,
                    status,
                    error: None,
                }
            }
            Err(e) => {
                errors += 1;
                tracing::warn!(path = %candidate.rel, error = %e, "Failed to remove");
                CleanItem {
                    path: candidate.rel,
                    kind: candidate.kind,
                    status: ItemStatus::Error,
                    error: Some(e.to_string()),
                }
            }
        };
        items.push(item);
    }

    let removed = removed_directories + removed_files;
    let totals = CleanTotals {
        processed: removed + skipped.len() + errors,
        removed,
        skipped: skipped.len(),
        errors,
    };
    tracing::info!(
        target = %target.display(),
        removed,
        skipped = totals.skipped,
        errors,
        dry_run = options.dry_run,
        "Clean finished"
    );

    Ok(CleanReport {
        target: target.display().to_string(),
        dry_run: options.dry_run,
        excludes,
        totals,
        removed_directories,
        removed_files,
        items,
        skipped,
    })
}

struct PatternMatchers {
    by_name: GlobSet,
    by_path: GlobSet,
}

impl PatternMatchers {
    fn new(patterns: &[String]) -> Result<Self> {
        let mut by_name = GlobSetBuilder::new();
        let mut by_path = GlobSetBuilder::new();
        for pattern in patterns.iter().filter(|p| !p.is_empty()) {
            if pattern.contains('/') {
                by_path.add(Glob::new(pattern)?);
            } else {
                by_name.add(Glob::new(pattern)?);
            }
        }
        Ok(Self {
            by_name: by_name.build()?,
            by_path: by_path.build()?,
        })
    }

    fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_path.is_empty()
    }

    fn is_match(&self, name: &str, rel: &str) -> bool {
        self.by_name.is_match(name) || self.by_path.is_match(rel)
    }
}

fn collect_pattern_matches(
    target: &Path,
    matchers: &PatternMatchers,
    excludes: &[String],
    candidates: &mut Vec<Candidate>,
) {
    let mut walker = WalkDir::new(target)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        let Ok(rel_path) = entry.path().strip_prefix(target) else {
            continue;
        };
        let rel = normalize_rel(&rel_path.to_string_lossy());
        let is_dir = entry.file_type().is_dir();

        // Nothing below an excluded or already scheduled directory is visited.
        if is_excluded(&rel, excludes) || candidates.iter().any(|c| c.path == entry.path()) {
            if is_dir {
                walker.skip_current_dir();
            }
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if matchers.is_match(&name, &rel) {
            candidates.push(Candidate {
                path: entry.path().to_path_buf(),
                rel,
                kind: ItemKind::Pattern,
            });
            if is_dir {
                walker.skip_current_dir();
            }
        }
    }
}

/// `./a\b/` becomes `a/b`.
fn normalize_rel(path: &str) -> String {
    let unified = path.replace('\\', "/");
    unified
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

fn is_excluded(rel: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| {
        rel == exclude
            || rel
                .strip_prefix(exclude.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    })
}
