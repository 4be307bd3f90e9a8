//! Error types for tidy-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tidy-core
    #[error(transparent)]
    Core(#[from] tidy_core::Error),

    /// Error from tidy-content
    #[error(transparent)]
    Content(#[from] tidy_content::Error),

    /// Error from tidy-tools
    #[error(transparent)]
    Tools(#[from] tidy_tools::Error),

    /// Error from tidy-fs
    #[error(transparent)]
    Fs(#[from] tidy_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit code: 2 for names the user got wrong, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        let tools_error = match self {
            CliError::Tools(e) | CliError::Core(tidy_core::Error::Tools(e)) => Some(e),
            _ => None,
        };
        match tools_error {
            Some(tidy_tools::Error::UnknownTool { .. } | tidy_tools::Error::UnknownHook { .. }) => 2,
            _ => 1,
        }
    }
}
