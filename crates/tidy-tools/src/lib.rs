//! Tool knowledge for tidycode.
//!
//! This crate knows *what* each supported Python tool wants, without
//! touching the filesystem or spawning anything:
//!
//! - [`registry`]: the canonical `pyproject.toml` sections per tool and
//!   the named groups (`defaults`, `quality`, ...).
//! - [`runner`]: the command lines used to invoke each tool.
//! - [`hooks`]: the pre-commit repositories tidycode can install.

pub mod error;
pub mod hooks;
pub mod registry;
pub mod runner;

pub use error::{Error, Result};
pub use hooks::{HookDefinition, HookRepo, HookSpec, MINIMAL_HOOKS};
pub use registry::{ToolCategory, ToolGroup, ToolRegistration, ToolRegistry};
pub use runner::{CommandSpec, RunnerKind, RunnerOptions};
