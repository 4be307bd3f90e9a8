//! Orchestration layer for tidycode
//!
//! Ties the document model, the tool registry and the filesystem together:
//!
//! - [`apply`]: merge tool sections into `pyproject.toml`, all or nothing
//! - [`settings`]: read `[tool.tidycode]`
//! - [`precommit`]: manage `.pre-commit-config.yaml`
//! - [`process`] and [`quality`]: run external tools and summarise results
//! - [`clean`]: remove caches and build artefacts
//! - [`dependabot`]: scaffold `.github/dependabot.yml`
//! - [`inspect`]: read-only views of `pyproject.toml` for display

pub mod apply;
pub mod clean;
pub mod dependabot;
pub mod error;
pub mod inspect;
pub mod precommit;
pub mod process;
pub mod quality;
pub mod settings;

pub use apply::{ApplyOptions, ApplyReport, apply};
pub use clean::{CleanOptions, CleanReport, run_clean};
pub use dependabot::setup_dependabot;
pub use error::{Error, Result};
pub use precommit::PreCommitConfig;
pub use process::{CommandExecutor, CommandOutput, SystemExecutor};
pub use quality::{RunStatus, RunSummary, ToolRun, run_tools};
pub use settings::{CleanSettings, TidySettings};
