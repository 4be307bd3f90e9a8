//! Error types for tidy-core

use std::path::PathBuf;

/// Result type for tidy-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tidy-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration file exists but does not have the expected shape
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// An external program is not installed or not on PATH
    #[error("'{program}' not found; is it installed and on PATH?")]
    ToolNotFound { program: String },

    /// An external program exited unsuccessfully
    #[error("`{command}` failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    // Transparent wrappers for underlying crate errors
    #[error(transparent)]
    Fs(#[from] tidy_fs::Error),

    #[error(transparent)]
    Content(#[from] tidy_content::Error),

    #[error(transparent)]
    Tools(#[from] tidy_tools::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Glob(#[from] globset::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
