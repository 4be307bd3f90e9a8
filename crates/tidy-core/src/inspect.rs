//! Read-only views of `pyproject.toml` for display

use serde_json::Value;
use tidy_content::ConfigDocument;

/// Sections left out of listings unless `--all` is given.
pub const HIDDEN_SECTIONS: [&str; 3] = ["project", "tool.poetry", "build-system"];

const SENSITIVE_KEYS: [&str; 4] = ["api_key", "token", "password", "secret"];

pub const MASK: &str = "****";

/// Whether `section` is a hidden section or lives below one.
pub fn is_hidden(section: &str) -> bool {
    HIDDEN_SECTIONS.iter().any(|hidden| {
        section == *hidden
            || section
                .strip_prefix(hidden)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Dotted section names, filtered unless `show_all`.
pub fn visible_sections(doc: &ConfigDocument, show_all: bool) -> Vec<String> {
    doc.list_sections()
        .into_iter()
        .filter(|section| show_all || !is_hidden(section))
        .collect()
}

/// `token`, `API_KEY`, `pypi-token` and `db_password` are sensitive;
/// `tokenizer` is not.
pub fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SENSITIVE_KEYS.iter().any(|sensitive| {
        key == *sensitive
            || key
                .strip_suffix(sensitive)
                .is_some_and(|rest| rest.ends_with('_') || rest.ends_with('-'))
    })
}

/// Replace the values of sensitive keys with [`MASK`], at any depth.
///
/// Returns how many values were masked.
pub fn mask_sensitive(value: &mut Value) -> usize {
    match value {
        Value::Object(map) => map
            .iter_mut()
            .map(|(key, child)| {
                if is_sensitive_key(key) {
                    *child = Value::String(MASK.to_string());
                    1
                } else {
                    mask_sensitive(child)
                }
            })
            .sum(),
        Value::Array(items) => items.iter_mut().map(mask_sensitive).sum(),
        _ => 0,
    }
}
