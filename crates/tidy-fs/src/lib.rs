//! Filesystem primitives for tidycode
//!
//! Provides normalized path handling, well-known project file names and
//! crash-safe I/O for the configuration files tidycode rewrites.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::ProjectFile;
pub use error::{Error, Result};
pub use path::NormalizedPath;
