//! Format-preserving configuration document

use tidy_fs::NormalizedPath;
use toml_edit::{DocumentMut, Item, Table, TableLike};

use crate::error::{Error, Result};
use crate::merge::{self, Change};
use crate::section_path::{SectionPath, join_segments};
use crate::value::{ConfigValue, DesiredSection, Mapping};

/// A TOML document that remembers the text it was loaded from.
///
/// Comments, whitespace and key order survive every operation except the
/// ones that explicitly replace or remove a value.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    doc: DocumentMut,
    original: String,
    origin: String,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self {
            doc: DocumentMut::new(),
            original: String::new(),
            origin: "<memory>".to_string(),
        }
    }

    /// Parse a document from text. `origin` names the source in errors.
    pub fn parse(source: &str, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        let doc: DocumentMut = source
            .parse()
            .map_err(|e: toml_edit::TomlError| Error::parse("TOML", &origin, e.to_string()))?;
        Ok(Self {
            doc,
            original: source.to_string(),
            origin,
        })
    }

    /// Load a document from disk. A missing file yields an empty document.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        match tidy_fs::io::read_text_if_exists(path)? {
            Some(source) => {
                tracing::debug!(path = %path, "Loaded document");
                Self::parse(&source, path.as_str())
            }
            None => {
                tracing::debug!(path = %path, "Document absent, starting empty");
                Ok(Self {
                    origin: path.as_str().to_string(),
                    ..Self::new()
                })
            }
        }
    }

    /// Write the current text atomically.
    pub fn dump(&self, path: &NormalizedPath) -> Result<()> {
        tidy_fs::io::write_text(path, &self.render())?;
        tracing::info!(path = %path, "Wrote document");
        Ok(())
    }

    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    /// The text this document was loaded from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn is_modified(&self) -> bool {
        self.render() != self.original
    }

    pub fn is_empty(&self) -> bool {
        self.doc.as_table().is_empty()
    }

    pub fn as_toml(&self) -> &DocumentMut {
        &self.doc
    }

    pub fn get(&self, path: &SectionPath) -> Option<&Item> {
        merge::lookup(self.doc.as_table(), path.segments()).filter(|item| !item.is_none())
    }

    pub fn contains(&self, path: &SectionPath) -> bool {
        self.get(path).is_some()
    }

    /// Dotted paths of every `[table]` and `[[array of tables]]`, parents
    /// before children.
    pub fn list_sections(&self) -> Vec<String> {
        let mut sections = Vec::new();
        let mut prefix = Vec::new();
        collect_sections(self.doc.as_table(), &mut prefix, &mut sections);
        sections
    }

    /// The node at `path` as JSON.
    pub fn section_json(&self, path: &SectionPath) -> Result<serde_json::Value> {
        self.get(path)
            .map(item_to_json)
            .ok_or_else(|| Error::SectionNotFound {
                path: path.to_string(),
            })
    }

    /// The whole document as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        table_to_json(self.doc.as_table())
    }

    /// Merge a desired section. On error the document is unchanged.
    pub fn merge(&mut self, path: &SectionPath, desired: &DesiredSection) -> Result<Vec<Change>> {
        merge::merge(&mut self.doc, path, desired)
    }

    /// Set a single key, e.g. `tool.black.line-length`, creating parent
    /// tables as needed.
    pub fn set_key(&mut self, key: &SectionPath, value: ConfigValue) -> Result<Vec<Change>> {
        let (parent, last) = key.split_last();
        let desired = Mapping::new().with(last, value);
        let changes = merge::merge_at(&mut self.doc, parent, &desired)?;
        tracing::debug!(key = %key, changes = changes.len(), "Set key");
        Ok(changes)
    }

    /// Remove a table or key.
    pub fn remove_section(&mut self, path: &SectionPath) -> Result<Item> {
        let not_found = || Error::SectionNotFound {
            path: path.to_string(),
        };
        let (parents, last) = path.split_last();

        let mut current: &mut dyn TableLike = self.doc.as_table_mut();
        for segment in parents {
            current = current
                .get_mut(segment)
                .and_then(Item::as_table_like_mut)
                .ok_or_else(not_found)?;
        }
        let removed = current
            .remove(last)
            .filter(|item| !item.is_none())
            .ok_or_else(not_found)?;

        tracing::debug!(section = %path, "Removed section");
        Ok(removed)
    }
}

fn collect_sections(table: &Table, prefix: &mut Vec<String>, out: &mut Vec<String>) {
    for (key, item) in table.iter() {
        prefix.push(key.to_string());
        match item {
            Item::Table(child) if !child.is_dotted() => {
                out.push(join_segments(prefix));
                collect_sections(child, prefix, out);
            }
            Item::ArrayOfTables(array) => {
                out.push(join_segments(prefix));
                for child in array.iter() {
                    collect_sections(child, prefix, out);
                }
            }
            _ => {}
        }
        prefix.pop();
    }
}

fn table_to_json(table: &Table) -> serde_json::Value {
    let map = table
        .iter()
        .map(|(key, item)| (key.to_string(), item_to_json(item)))
        .collect();
    serde_json::Value::Object(map)
}

fn item_to_json(item: &Item) -> serde_json::Value {
    match item {
        Item::Value(value) => value_to_json(value),
        Item::Table(table) => table_to_json(table),
        Item::ArrayOfTables(array) => {
            serde_json::Value::Array(array.iter().map(table_to_json).collect())
        }
        Item::None => serde_json::Value::Null,
    }
}

fn value_to_json(value: &toml_edit::Value) -> serde_json::Value {
    use toml_edit::Value;

    match value {
        Value::String(s) => serde_json::Value::String(s.value().to_string()),
        Value::Integer(i) => serde_json::Value::Number((*i.value()).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f.value())
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(*b.value()),
        Value::Datetime(d) => serde_json::Value::String(d.value().to_string()),
        Value::Array(array) => serde_json::Value::Array(array.iter().map(value_to_json).collect()),
        Value::InlineTable(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.to_string(), value_to_json(value)))
                .collect(),
        ),
    }
}
