//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tidycode - Keep Python tool configuration tidy
#[derive(Parser, Debug)]
#[command(name = "tidycode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to pyproject.toml; its directory is the project root
    #[arg(
        long,
        global = true,
        env = "TIDYCODE_PYPROJECT",
        default_value = "pyproject.toml"
    )]
    pub pyproject: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the default tool sections (tidycode, black, ruff, isort)
    Init {
        /// Show the diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Write the sections of the given tools or groups
    ///
    /// Examples:
    ///   tidycode setup black            # One tool
    ///   tidycode setup quality          # A group
    ///   tidycode setup mypy --dry-run   # Preview
    Setup {
        /// Tool or group names (see `tidycode list-tools`)
        #[arg(required = true)]
        tools: Vec<String>,

        /// Show the diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List the tools and groups tidycode knows about
    ListTools {
        /// Only show one category (formatter, linter, type-checker, ...)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Inspect and edit pyproject.toml
    Pyproject {
        #[command(subcommand)]
        action: PyprojectAction,
    },

    /// Run formatters, linters and the type checker
    Quality {
        /// Comma-separated tools or groups; defaults to `[tool.tidycode].tools`
        #[arg(long, value_delimiter = ',')]
        tools: Vec<String>,

        /// Report problems without rewriting files
        #[arg(long)]
        check_only: bool,

        /// Directory to check; defaults to `[tool.tidycode].target`
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Run bandit and pip-audit
    Security {
        /// Directory to scan; defaults to `[tool.tidycode].target`
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Run the test suite under coverage and print the report
    Coverage,

    /// Bump the version with commitizen
    Bump {
        /// Show what would change
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage .pre-commit-config.yaml
    Hooks {
        #[command(subcommand)]
        action: HooksAction,
    },

    /// Remove caches and build artefacts
    Clean {
        /// List what would be removed
        #[arg(long)]
        dry_run: bool,

        /// Directory to clean; defaults to `[tool.tidycode.clean].target`
        #[arg(long)]
        target: Option<PathBuf>,

        /// Comma-separated relative paths to keep, replacing the configured excludes
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create .github/dependabot.yml
    Dependabot {
        /// Where to write the file; defaults to .github/dependabot.yml in the project root
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// pyproject.toml inspection and editing
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PyprojectAction {
    /// List sections
    List {
        /// Include project metadata and build-system sections
        #[arg(long)]
        all: bool,
    },

    /// Print one section
    Show {
        /// Dotted section path, e.g. tool.ruff.lint
        section: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Do not mask tokens, passwords and other secrets
        #[arg(long)]
        show_secrets: bool,
    },

    /// Remove a section
    Remove {
        /// Dotted section path
        section: String,
    },

    /// Set a single key
    ///
    /// The value is read as a TOML literal when possible (`88`, `true`,
    /// `["src"]`) and as a plain string otherwise.
    Set {
        /// Dotted key path, e.g. tool.black.line-length
        key: String,

        /// New value
        value: String,
    },
}

/// Pre-commit hook management
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HooksAction {
    /// Show the hook catalog and what is installed
    List,

    /// Add hooks from the catalog
    Add {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Remove hooks from the config
    Remove {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Write a config with every catalog hook
    Init {
        /// Only the basic checks, black and ruff
        #[arg(long)]
        minimal: bool,
    },

    /// Run `pre-commit install`
    Install,

    /// Run `pre-commit autoupdate`
    Autoupdate,
}
