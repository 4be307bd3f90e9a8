//! Text diffs for previewing changes

use similar::TextDiff;

/// Render a unified diff between two versions of a file.
///
/// Returns an empty string when the texts are identical.
pub fn unified_diff(old: &str, new: &str, label: &str) -> String {
    if old == new {
        return String::new();
    }

    let old_header = format!("a/{label}");
    let new_header = format!("b/{label}");
    let diff = TextDiff::from_lines(old, new);
    diff.unified_diff()
        .context_radius(3)
        .header(&old_header, &new_header)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_produce_no_diff() {
        assert_eq!(unified_diff("a = 1\n", "a = 1\n", "pyproject.toml"), "");
    }

    #[test]
    fn test_diff_has_headers_and_hunks() {
        let diff = unified_diff(
            "[tool.black]\nline-length = 100\n",
            "[tool.black]\nline-length = 88\n",
            "pyproject.toml",
        );
        assert!(diff.starts_with("--- a/pyproject.toml\n+++ b/pyproject.toml\n"));
        assert!(diff.contains("-line-length = 100\n"));
        assert!(diff.contains("+line-length = 88\n"));
        assert!(diff.contains(" [tool.black]\n"));
    }
}
