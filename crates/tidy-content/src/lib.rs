//! Configuration documents for tidycode
//!
//! Loads `pyproject.toml`-style documents without losing comments or key
//! order, and merges declarative tool sections into them.

pub mod diff;
pub mod document;
pub mod error;
pub mod merge;
pub mod section_path;
pub mod value;

pub use diff::unified_diff;
pub use document::ConfigDocument;
pub use error::{Error, Result};
pub use merge::{Change, ChangeKind};
pub use section_path::SectionPath;
pub use value::{ConfigValue, DesiredSection, Mapping, Scalar};
