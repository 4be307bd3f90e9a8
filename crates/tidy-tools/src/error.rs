//! Error types for tidy-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown tool '{name}' (run `tidycode list-tools` to see what is available)")]
    UnknownTool { name: String },

    #[error("Unknown hook '{key}'")]
    UnknownHook { key: String },
}
