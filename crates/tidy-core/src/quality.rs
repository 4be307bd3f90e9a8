//! Sequential tool runs with a summary

use std::fmt;

use tidy_tools::{RunnerOptions, ToolRegistry};

use crate::error::Error;
use crate::process::CommandExecutor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Exited with a non-zero code
    Failed(i32),
    /// Program not installed
    NotFound,
    /// Could not be started for another reason
    Error,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "ok"),
            Self::Failed(code) => write!(f, "failed (exit {code})"),
            Self::NotFound => write!(f, "not found"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    pub tool: String,
    /// The command's display name
    pub command: String,
    pub status: RunStatus,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub runs: Vec<ToolRun>,
    /// Names that were not run, with the reason
    pub skipped: Vec<(String, String)>,
}

impl RunSummary {
    /// True when every command that ran succeeded.
    pub fn success(&self) -> bool {
        self.runs.iter().all(|run| run.status == RunStatus::Success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ToolRun> {
        self.runs
            .iter()
            .filter(|run| run.status != RunStatus::Success)
    }
}

/// Run the tools named by `names` (tools or groups) one after another.
///
/// Unknown names and tools without a runner are skipped with a warning.
/// Within a tool, later commands are not started once one fails.
pub fn run_tools<S: AsRef<str>>(
    executor: &dyn CommandExecutor,
    registry: &ToolRegistry,
    names: &[S],
    options: &RunnerOptions,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut seen: Vec<&str> = Vec::new();

    for name in names {
        let name = name.as_ref();
        let tools = match registry.resolve(&[name]) {
            Ok(tools) => tools,
            Err(e) => {
                tracing::warn!(tool = name, "Skipping unknown tool");
                summary.skipped.push((name.to_string(), e.to_string()));
                continue;
            }
        };

        for tool in tools {
            if seen.contains(&tool.slug.as_str()) {
                continue;
            }
            seen.push(&tool.slug);

            let Some(runner) = tool.runner else {
                tracing::warn!(tool = %tool.slug, "Tool has no runner, skipping");
                summary
                    .skipped
                    .push((tool.slug.clone(), "nothing to run".to_string()));
                continue;
            };

            for spec in runner.build_commands(options) {
                tracing::info!(tool = %tool.slug, command = %spec, "Running");
                let run = match executor.execute(&spec) {
                    Ok(output) => ToolRun {
                        tool: tool.slug.clone(),
                        command: spec.display_name.clone(),
                        status: if output.success() {
                            RunStatus::Success
                        } else {
                            RunStatus::Failed(output.code)
                        },
                        stdout: output.stdout,
                        stderr: output.stderr,
                    },
                    Err(Error::ToolNotFound { program }) => {
                        tracing::warn!(program = %program, "Program not found");
                        ToolRun {
                            tool: tool.slug.clone(),
                            command: spec.display_name.clone(),
                            status: RunStatus::NotFound,
                            stdout: String::new(),
                            stderr: format!("'{program}' not found"),
                        }
                    }
                    Err(e) => ToolRun {
                        tool: tool.slug.clone(),
                        command: spec.display_name.clone(),
                        status: RunStatus::Error,
                        stdout: String::new(),
                        stderr: e.to_string(),
                    },
                };

                let failed = run.status != RunStatus::Success;
                summary.runs.push(run);
                if failed {
                    break;
                }
            }
        }
    }

    summary
}
