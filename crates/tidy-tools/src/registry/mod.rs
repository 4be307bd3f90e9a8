//! Tool registry
//!
//! One ordered table of every tool tidycode configures, plus the named
//! groups that expand to several tools. Built once and passed around by
//! reference; nothing mutates it after construction.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, DEFAULT_QUALITY_TOOLS, builtin_groups, builtin_registrations};
pub use store::{ALL_GROUP, ToolRegistry};
pub use types::{ToolCategory, ToolGroup, ToolRegistration};
