//! Command lines for external tools

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A program invocation, ready to hand to an executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Label used in progress output and summaries
    pub display_name: String,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            display_name: program.clone(),
            program,
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Knobs shared by every runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Relative to `cwd` when one is set
    pub target: PathBuf,
    /// Config file handed to tools that take one explicitly
    pub config: PathBuf,
    /// Directory every command is started in
    pub cwd: Option<PathBuf>,
    /// Report problems without rewriting files
    pub check_only: bool,
    /// Only meaningful for release tooling
    pub dry_run: bool,
}

impl RunnerOptions {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            config: PathBuf::from("pyproject.toml"),
            cwd: None,
            check_only: false,
            dry_run: false,
        }
    }

    pub fn config(mut self, config: impl Into<PathBuf>) -> Self {
        self.config = config.into();
        self
    }

    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn check_only(mut self, check_only: bool) -> Self {
        self.check_only = check_only;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

/// How a registered tool is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnerKind {
    Black,
    Isort,
    Ruff,
    Mypy,
    Bandit,
    PipAudit,
    Coverage,
    Commitizen,
}

impl RunnerKind {
    /// Build the commands to run, in order.
    pub fn build_commands(&self, options: &RunnerOptions) -> Vec<CommandSpec> {
        let commands = self.commands(options);
        match &options.cwd {
            Some(cwd) => commands.into_iter().map(|c| c.with_cwd(cwd)).collect(),
            None => commands,
        }
    }

    fn commands(&self, options: &RunnerOptions) -> Vec<CommandSpec> {
        let target = path_arg(&options.target);
        match self {
            RunnerKind::Black => {
                let cmd = CommandSpec::new("black").arg(target);
                vec![if options.check_only { cmd.arg("--check") } else { cmd }]
            }
            RunnerKind::Isort => {
                let cmd = CommandSpec::new("isort").arg(target);
                vec![if options.check_only {
                    cmd.arg("--check-only")
                } else {
                    cmd
                }]
            }
            RunnerKind::Ruff => {
                let cmd = CommandSpec::new("ruff").args(["check", target.as_str()]);
                vec![if options.check_only { cmd } else { cmd.arg("--fix") }]
            }
            RunnerKind::Mypy => vec![CommandSpec::new("mypy").arg(target)],
            RunnerKind::Bandit => vec![CommandSpec::new("bandit").args([
                "-c",
                path_arg(&options.config).as_str(),
                "-r",
                target.as_str(),
            ])],
            RunnerKind::PipAudit => vec![CommandSpec::new("pip-audit")],
            RunnerKind::Coverage => vec![
                CommandSpec::new("coverage")
                    .args(["run", "-m", "pytest"])
                    .with_display_name("coverage run"),
                CommandSpec::new("coverage")
                    .arg("report")
                    .with_display_name("coverage report"),
            ],
            RunnerKind::Commitizen => {
                let cmd = CommandSpec::new("cz")
                    .args(["bump", "--yes"])
                    .with_display_name("commitizen bump");
                vec![if options.dry_run {
                    cmd.arg("--dry-run")
                } else {
                    cmd
                }]
            }
        }
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
