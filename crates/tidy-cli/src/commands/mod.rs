//! Command implementations for tidy-cli

pub mod clean;
pub mod dependabot;
pub mod hooks;
pub mod list;
pub mod pyproject;
pub mod quality;
pub mod setup;

pub use clean::run_clean;
pub use dependabot::run_dependabot;
pub use hooks::{run_hooks_add, run_hooks_command, run_hooks_init, run_hooks_list, run_hooks_remove};
pub use list::run_list_tools;
pub use pyproject::{
    run_pyproject_list, run_pyproject_remove, run_pyproject_set, run_pyproject_show,
};
pub use quality::{run_bump, run_coverage, run_quality, run_security};
pub use setup::{run_init, run_setup};
