//! Error types for tidy-content

/// Result type for tidy-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tidy-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} in {origin}: {message}")]
    ParseError {
        format: String,
        origin: String,
        message: String,
    },

    #[error("Cannot merge into '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("Invalid section path '{path}': {reason}")]
    InvalidSectionPath { path: String, reason: String },

    #[error("Section not found: {path}")]
    SectionNotFound { path: String },

    #[error(transparent)]
    Fs(#[from] tidy_fs::Error),
}

impl Error {
    pub fn parse(
        format: impl Into<String>,
        origin: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ParseError {
            format: format.into(),
            origin: origin.into(),
            message: message.into(),
        }
    }

    pub(crate) fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}
