//! Section merging
//!
//! Merges a desired section into a `toml_edit` document so that
//!
//! - keys the desired section does not mention are left alone,
//! - existing keys keep their position and trailing comments,
//! - new keys are appended after the existing ones,
//! - merging the same section twice changes nothing the second time.
//!
//! Merging is all-or-nothing: a type conflict anywhere leaves the
//! document exactly as it was.

use std::fmt;

use toml_edit::{DocumentMut, InlineTable, Item, Table, TableLike, Value};

use crate::error::{Error, Result};
use crate::section_path::{SectionPath, join_segments};
use crate::value::{ConfigValue, DesiredSection, Mapping};

/// What happened to a single key during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Edited,
}

/// A key-level change made by a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    /// Full dotted path to the key, e.g. `tool.ruff.lint.select`
    pub path: String,
    pub old: Option<String>,
    pub new: String,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.old) {
            (ChangeKind::Edited, Some(old)) => {
                write!(f, "~ {} = {} (was {})", self.path, self.new, old)
            }
            _ => write!(f, "+ {} = {}", self.path, self.new),
        }
    }
}

/// Merge `desired` into the table at `path`, creating missing tables.
///
/// Returns the key-level changes, empty if the document already
/// contained everything. An empty `desired` never creates anything but
/// still fails if `path` runs through a non-table value.
pub fn merge(
    doc: &mut DocumentMut,
    path: &SectionPath,
    desired: &DesiredSection,
) -> Result<Vec<Change>> {
    let changes = merge_at(doc, path.segments(), desired)?;
    tracing::debug!(section = %path, changes = changes.len(), "Merged section");
    Ok(changes)
}

/// Same as [`merge`], but addressed by raw segments. An empty slice
/// merges into the document root.
pub(crate) fn merge_at(
    doc: &mut DocumentMut,
    segments: &[String],
    desired: &Mapping,
) -> Result<Vec<Change>> {
    if desired.is_empty() {
        validate_path(doc.as_table(), segments)?;
        return Ok(Vec::new());
    }

    let mut staged = doc.clone();
    let mut changes = Vec::new();
    let mut current = Vec::with_capacity(segments.len() + 2);

    let mut node = NodeMut::Table(staged.as_table_mut());
    for segment in segments {
        current.push(segment.clone());
        node = node.into_child(segment, &current)?;
    }
    merge_mapping(node, &mut current, desired, &mut changes)?;

    *doc = staged;
    Ok(changes)
}

/// Look up the item at `segments`, descending through both standard and
/// inline tables.
pub(crate) fn lookup<'a>(root: &'a Table, segments: &[String]) -> Option<&'a Item> {
    let (last, parents) = segments.split_last()?;
    let mut current: &dyn TableLike = root;
    for segment in parents {
        current = current.get(segment)?.as_table_like()?;
    }
    current.get(last)
}

/// Fail if any existing prefix of `segments` is not a table.
pub(crate) fn validate_path(root: &Table, segments: &[String]) -> Result<()> {
    let mut current: &dyn TableLike = root;
    for (i, segment) in segments.iter().enumerate() {
        let Some(item) = current.get(segment) else {
            return Ok(());
        };
        match item.as_table_like() {
            Some(table) => current = table,
            None if item.is_none() => return Ok(()),
            None => {
                return Err(Error::type_mismatch(
                    join_segments(&segments[..=i]),
                    "table",
                    describe_item(item),
                ));
            }
        }
    }
    Ok(())
}

/// Short description of an item's type, for error messages.
pub(crate) fn describe_item(item: &Item) -> &'static str {
    match item {
        Item::None => "nothing",
        Item::Table(_) => "table",
        Item::ArrayOfTables(_) => "array of tables",
        Item::Value(value) => describe_value(value),
    }
}

fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "array",
        Value::InlineTable(_) => "inline table",
    }
}

/// A value rendered without its surrounding whitespace and comments.
pub(crate) fn display_value(value: &Value) -> String {
    let mut bare = value.clone();
    bare.decor_mut().clear();
    bare.to_string()
}

/// A mutable table position: either a `[header]` table or an inline table.
enum NodeMut<'a> {
    Table(&'a mut Table),
    Inline(&'a mut InlineTable),
}

impl<'a> NodeMut<'a> {
    fn into_child(self, key: &str, path: &[String]) -> Result<NodeMut<'a>> {
        match self {
            NodeMut::Table(table) => {
                let item = table.entry(key).or_insert(Item::None);
                if item.is_none() {
                    *item = Item::Table(Table::new());
                }
                match item {
                    Item::Table(child) => Ok(NodeMut::Table(child)),
                    Item::Value(Value::InlineTable(child)) => Ok(NodeMut::Inline(child)),
                    other => Err(Error::type_mismatch(
                        join_segments(path),
                        "table",
                        describe_item(other),
                    )),
                }
            }
            NodeMut::Inline(table) => {
                let value = table
                    .entry(key)
                    .or_insert(Value::InlineTable(InlineTable::new()));
                match value {
                    Value::InlineTable(child) => Ok(NodeMut::Inline(child)),
                    other => Err(Error::type_mismatch(
                        join_segments(path),
                        "table",
                        describe_value(other),
                    )),
                }
            }
        }
    }

    fn child(&mut self, key: &str, path: &[String]) -> Result<NodeMut<'_>> {
        match self {
            NodeMut::Table(table) => NodeMut::Table(&mut **table).into_child(key, path),
            NodeMut::Inline(table) => NodeMut::Inline(&mut **table).into_child(key, path),
        }
    }

    /// Description of an existing entry that is not a table, if any.
    fn conflict(&self, key: &str) -> Option<&'static str> {
        let item = match self {
            NodeMut::Table(table) => table.get(key),
            NodeMut::Inline(table) => TableLike::get(&**table, key),
        }?;
        if item.is_none() || item.is_table_like() {
            None
        } else {
            Some(describe_item(item))
        }
    }

    fn set_leaf(
        &mut self,
        key: &str,
        desired: &ConfigValue,
        path: &[String],
        changes: &mut Vec<Change>,
    ) -> Result<()> {
        let existing = match self {
            NodeMut::Table(table) => {
                let item = table.entry(key).or_insert(Item::None);
                if item.is_none() {
                    *item = Item::Value(desired.to_toml_value());
                    None
                } else if let Item::Value(value) = item {
                    Some(value)
                } else {
                    return Err(Error::type_mismatch(
                        join_segments(path),
                        desired.kind(),
                        describe_item(item),
                    ));
                }
            }
            NodeMut::Inline(table) => match table.get_mut(key) {
                Some(value) => Some(value),
                None => {
                    table.insert(key, desired.to_toml_value());
                    None
                }
            },
        };

        let Some(existing) = existing else {
            tracing::trace!(key = %join_segments(path), "Added key");
            changes.push(Change {
                kind: ChangeKind::Added,
                path: join_segments(path),
                old: None,
                new: desired.render(),
            });
            return Ok(());
        };

        if existing.is_inline_table() {
            return Err(Error::type_mismatch(
                join_segments(path),
                desired.kind(),
                "inline table",
            ));
        }
        if desired.matches(existing) {
            return Ok(());
        }

        let old = display_value(existing);
        let decor = existing.decor().clone();
        *existing = desired.to_toml_value();
        *existing.decor_mut() = decor;

        tracing::trace!(key = %join_segments(path), "Edited key");
        changes.push(Change {
            kind: ChangeKind::Edited,
            path: join_segments(path),
            old: Some(old),
            new: desired.render(),
        });
        Ok(())
    }
}

fn merge_mapping(
    mut node: NodeMut<'_>,
    path: &mut Vec<String>,
    desired: &Mapping,
    changes: &mut Vec<Change>,
) -> Result<()> {
    for (key, value) in desired.iter() {
        path.push(key.to_string());
        match value {
            ConfigValue::Mapping(nested) if nested.is_empty() => {
                if let Some(found) = node.conflict(key) {
                    return Err(Error::type_mismatch(join_segments(path), "table", found));
                }
            }
            ConfigValue::Mapping(nested) => {
                let child = node.child(key, path)?;
                merge_mapping(child, path, nested, changes)?;
            }
            leaf => node.set_leaf(key, leaf, path, changes)?,
        }
        path.pop();
    }
    Ok(())
}
