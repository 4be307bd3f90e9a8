//! Dotted section paths
//!
//! A section path addresses a table inside a configuration document,
//! e.g. `tool.ruff.lint`. Segments that themselves contain dots can be
//! double-quoted: `tool."my.plugin"`.
//!
//! ```
//! use tidy_content::SectionPath;
//!
//! let path: SectionPath = "tool.ruff.lint".parse().unwrap();
//! assert_eq!(path.segments(), ["tool", "ruff", "lint"]);
//! assert_eq!(path.to_string(), "tool.ruff.lint");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A non-empty sequence of table keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionPath {
    segments: Vec<String>,
}

impl SectionPath {
    /// Parse a dotted path.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidSectionPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut quoted = false;
        let mut was_quoted = false;

        for ch in path.chars() {
            match ch {
                '"' => {
                    quoted = !quoted;
                    was_quoted = true;
                }
                '.' if !quoted => {
                    let segment = current.trim();
                    if segment.is_empty() && !was_quoted {
                        return Err(invalid("empty segment"));
                    }
                    segments.push(segment.to_string());
                    current.clear();
                    was_quoted = false;
                }
                _ => current.push(ch),
            }
        }

        if quoted {
            return Err(invalid("unterminated quote"));
        }
        let segment = current.trim();
        if segment.is_empty() && !was_quoted {
            return Err(invalid(if segments.is_empty() {
                "path is empty"
            } else {
                "empty segment"
            }));
        }
        segments.push(segment.to_string());

        Ok(Self { segments })
    }

    /// Build a path from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(Error::InvalidSectionPath {
                path: String::new(),
                reason: "path is empty".to_string(),
            });
        }
        Ok(Self { segments })
    }

    /// `tool.<name>`, the conventional home of a tool's settings.
    pub fn tool(name: &str) -> Self {
        Self {
            segments: vec!["tool".to_string(), name.to_string()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path extended by one key.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    /// Split into the parent segments and the final key.
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parent)) => (parent, last.as_str()),
            None => (&[], ""),
        }
    }

    /// Whether `self` is `other` or nested below it.
    pub fn starts_with(&self, other: &SectionPath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

/// Join segments for display, quoting any segment that contains a dot.
pub(crate) fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| {
            let s = s.as_ref();
            if s.contains('.') || s.is_empty() {
                format!("\"{}\"", s)
            } else {
                s.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

impl FromStr for SectionPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_segments(&self.segments))
    }
}
