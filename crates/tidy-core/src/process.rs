//! External process execution
//!
//! Runners only describe command lines; this module spawns them. The
//! [`CommandExecutor`] trait is the seam tests use to avoid real tools.

use std::io::ErrorKind;
use std::process::Command;

use tidy_tools::CommandSpec;

use crate::error::{Error, Result};

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Something that can run a [`CommandSpec`].
pub trait CommandExecutor {
    /// Run the command to completion.
    ///
    /// A non-zero exit is reported through [`CommandOutput::code`], not as an
    /// error. Errors are reserved for commands that could not be started.
    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// Spawns real processes with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        tracing::debug!(command = %spec, "Spawning");
        let output = cmd.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ToolNotFound {
                program: spec.program.clone(),
            },
            _ => Error::Io(e),
        })?;

        Ok(CommandOutput {
            // Killed by a signal
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Run a command and turn a non-zero exit into [`Error::CommandFailed`].
pub fn run_checked(executor: &dyn CommandExecutor, spec: &CommandSpec) -> Result<CommandOutput> {
    let output = executor.execute(spec)?;
    if output.success() {
        Ok(output)
    } else {
        Err(Error::CommandFailed {
            command: spec.to_string(),
            code: output.code,
            stderr: output.stderr,
        })
    }
}
